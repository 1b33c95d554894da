//! Per-session score tallying.

use super::types::{Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Running win and draw counters for the session.
///
/// The tally is created once per session and survives board resets; it
/// only goes away with the process. Exactly one counter moves per
/// finished game, at the moment the game first turns terminal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters,
)]
pub struct ScoreTally {
    /// Games X has won.
    x_wins: u32,
    /// Games O has won.
    o_wins: u32,
    /// Games that filled the board with no winner.
    draws: u32,
}

impl ScoreTally {
    /// Creates a tally with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        debug!(
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Tally updated"
        );
    }

    /// Total completed games.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

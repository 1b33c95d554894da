//! Pure game engine: state transitions, terminal detection, AI selection.
//!
//! Everything in this module is synchronous and allocation-light; the
//! only nondeterminism is the selector's random fallback, and callers
//! inject the [`rand::Rng`] that drives it. Scheduling concerns such as
//! the AI's thinking delay live in [`crate::session`], not here.

mod ai;
mod game;
mod rules;
mod tally;
mod types;

pub use ai::select_move;
pub use game::{Game, GameView};
pub use tally::ScoreTally;
pub use types::{Board, Cell, GameStatus, Mark, Outcome};

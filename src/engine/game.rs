//! The game state reducer: moves in, snapshots out.

use super::ai;
use super::rules;
use super::tally::ScoreTally;
use super::types::{Board, GameStatus, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete engine state: board, mover, derived status and session tally.
///
/// Invalid move requests are silent no-ops rather than errors. The UI
/// already refuses most of them, and the engine simply ignores whatever
/// slips through, leaving the state untouched and noting the reject in
/// the debug log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Mark,
    status: GameStatus,
    tally: ScoreTally,
}

impl Game {
    /// Creates a fresh game: empty board, X to move, zeroed tally.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            tally: ScoreTally::new(),
        }
    }

    /// Rebuilds a game by replaying an alternating move sequence from an
    /// empty board, X first.
    ///
    /// Moves after a terminal state, or aimed at occupied or out-of-range
    /// cells, are dropped exactly as live play drops them.
    pub fn replay(moves: &[usize]) -> Self {
        let mut game = Self::new();
        for &pos in moves {
            if game.status.is_terminal() || !game.board.is_empty(pos) {
                debug!(pos, "Dropping replayed move");
                continue;
            }
            game.place(pos);
        }
        game
    }

    /// The current board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// The mark that moves next. Meaningful only while in progress.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The derived game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The session tally.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Applies the human's move at `pos`.
    ///
    /// The human always plays X. The call lands only when the game is in
    /// progress, it is X's turn, and `pos` names an empty cell; any other
    /// request changes nothing and raises nothing.
    #[instrument(skip(self), fields(turn = %self.turn, status = ?self.status))]
    pub fn apply_move(&mut self, pos: usize) {
        if self.status.is_terminal() {
            debug!(pos, "Rejecting move: game is over");
            return;
        }
        if self.turn != Mark::X {
            debug!(pos, "Rejecting move: not the human's turn");
            return;
        }
        if pos >= 9 {
            debug!(pos, "Rejecting move: position out of range");
            return;
        }
        if !self.board.is_empty(pos) {
            debug!(pos, "Rejecting move: cell already occupied");
            return;
        }
        self.place(pos);
    }

    /// Runs the selector and applies the AI's move, returning the cell it
    /// took.
    ///
    /// A no-op returning `None` unless the game is in progress and it is
    /// O's turn. When those hold the selector always finds a cell: a full
    /// board would already have ended the game.
    #[instrument(skip(self, rng), fields(turn = %self.turn, status = ?self.status))]
    pub fn apply_ai_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.status.is_terminal() {
            debug!("Rejecting AI move: game is over");
            return None;
        }
        if self.turn != Mark::O {
            debug!("Rejecting AI move: not the AI's turn");
            return None;
        }
        let pos = ai::select_move(&self.board, rng)?;
        self.place(pos);
        Some(pos)
    }

    /// Clears the board and hands X the first move of a new round.
    ///
    /// The tally survives: a reset starts the next round of the same
    /// session, not a new session.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting board for a new round");
        self.board = Board::new();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
    }

    /// A renderable snapshot of the complete state.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board,
            turn: self.turn,
            status: self.status,
            tally: self.tally,
        }
    }

    /// Writes the mover's mark, flips the turn, re-derives the status,
    /// and settles the tally on the transition into a terminal state.
    fn place(&mut self, pos: usize) {
        debug!(pos, mark = %self.turn, "Placing mark");
        self.board = self.board.with_mark(pos, self.turn);
        self.turn = self.turn.opponent();
        self.status = rules::evaluate(&self.board);
        if let Some(outcome) = self.status.outcome() {
            info!(%outcome, board = %self.board, "Game over");
            self.tally.record(outcome);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// State snapshot consumed by the presentation layer.
///
/// Plain `Copy` data with no behavior; rendering decisions stay on the
/// other side of this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major order.
    pub board: Board,
    /// The mark that moves next.
    pub turn: Mark,
    /// In progress, won or drawn.
    pub status: GameStatus,
    /// Per-session win and draw counters.
    pub tally: ScoreTally,
}

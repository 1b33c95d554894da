//! tictactui - terminal tic-tac-toe against a one-ply heuristic AI.
//!
//! The human always plays X and moves first; the AI answers as O after a
//! short thinking delay. Wins and draws accumulate in a per-session tally
//! that survives board resets.
//!
//! # Architecture
//!
//! - **Engine** ([`engine`]): pure state transitions - move application,
//!   win and draw detection, AI move selection. Synchronous, no I/O.
//! - **Session** ([`session`]): owns a [`Game`], schedules the AI's
//!   deferred move as a cancellable task, publishes snapshots and events.
//! - **TUI** ([`tui`]): renders snapshots and forwards keys and clicks as
//!   move intents. Owns no game logic.
//!
//! # Example
//!
//! ```
//! use tictactui::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! game.apply_move(0); // X takes the top-left cell
//! assert_eq!(game.turn(), Mark::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Module declarations
pub mod cli;
pub mod engine;
pub mod session;
pub mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Engine types
pub use engine::{Board, Cell, Game, GameStatus, GameView, Mark, Outcome, ScoreTally};

// Crate-level exports - Session layer
pub use session::{GameEvent, GameSession};

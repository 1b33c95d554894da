//! Session layer: owns the engine state and schedules the AI's deferred
//! move as a cancellable task.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::engine::{Game, GameView, Mark, Outcome};

/// Messages the session pushes to the UI.
///
/// Advisory only: everything renderable already sits in the [`GameView`]
/// snapshot, and these exist so the status line can narrate what just
/// happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark landed on the board.
    MoveApplied {
        /// Who moved.
        mark: Mark,
        /// Cell index, 0 through 8 row-major.
        position: usize,
    },
    /// The AI's deferred move has been scheduled.
    AiThinking,
    /// The game reached a terminal state.
    GameOver {
        /// How the game ended.
        outcome: Outcome,
    },
    /// The board was cleared for a new round.
    BoardReset,
}

/// A single interactive session: one human playing X against the AI's O.
///
/// The session owns the only asynchronous behavior in the program. When a
/// human move hands the turn to the AI, a deferred task sleeps for the
/// thinking delay and then takes the AI's turn. Reset, and dropping the
/// session, abort the pending task; the task itself re-checks turn and
/// status under the game lock and picks its cell against the locked
/// board, so a cancelled-but-racing task can only drop its move, never
/// apply a stale one.
pub struct GameSession {
    game: Arc<Mutex<Game>>,
    pending_ai: Option<JoinHandle<()>>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    ai_delay: Duration,
}

impl GameSession {
    /// Creates a session publishing events to `event_tx`.
    #[instrument(skip(event_tx))]
    pub fn new(event_tx: mpsc::UnboundedSender<GameEvent>, ai_delay: Duration) -> Self {
        info!(?ai_delay, "Creating game session");
        Self {
            game: Arc::new(Mutex::new(Game::new())),
            pending_ai: None,
            event_tx,
            ai_delay,
        }
    }

    /// A snapshot of the current state for rendering.
    pub fn snapshot(&self) -> GameView {
        self.game.lock().unwrap().view()
    }

    /// True while an AI move is scheduled but not yet applied.
    pub fn ai_pending(&self) -> bool {
        self.pending_ai
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Forwards the human's move intent at `pos`.
    ///
    /// Illegal intents are no-ops, mirroring the engine. When the move
    /// lands and hands the turn to the AI, exactly one deferred AI move
    /// is scheduled.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: usize) {
        let view = {
            let mut game = self.game.lock().unwrap();
            let before = game.turn();
            game.apply_move(pos);
            let view = game.view();
            // A move that lands always flips the turn.
            if view.turn == before {
                debug!(pos, "Move intent ignored");
                return;
            }
            view
        };
        self.send(GameEvent::MoveApplied {
            mark: Mark::X,
            position: pos,
        });

        if let Some(outcome) = view.status.outcome() {
            self.send(GameEvent::GameOver { outcome });
            return;
        }
        if view.turn == Mark::O && !self.ai_pending() {
            self.schedule_ai_move();
        }
    }

    /// Clears the board for a new round, cancelling any pending AI move.
    ///
    /// The tally survives; only board, turn and status return to their
    /// starting values.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending_ai.take() {
            debug!("Cancelling pending AI move");
            pending.abort();
        }
        self.game.lock().unwrap().reset();
        self.send(GameEvent::BoardReset);
    }

    /// Spawns the deferred AI task: sleep for the thinking delay, then
    /// re-check and move under the game lock.
    #[instrument(skip(self))]
    fn schedule_ai_move(&mut self) {
        if let Some(stale) = self.pending_ai.take() {
            stale.abort();
        }
        debug!(delay = ?self.ai_delay, "Scheduling AI move");
        self.send(GameEvent::AiThinking);

        let game = Arc::clone(&self.game);
        let event_tx = self.event_tx.clone();
        let delay = self.ai_delay;
        self.pending_ai = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            // Choose and apply under one lock: the move can never be
            // stale relative to the board it was chosen against.
            let (played, view) = {
                let mut game = game.lock().unwrap();
                if game.status().is_terminal() || game.turn() != Mark::O {
                    debug!("Dropping pending AI move: the state moved on");
                    return;
                }
                let mut rng = rand::thread_rng();
                (game.apply_ai_move(&mut rng), game.view())
            };
            if let Some(position) = played {
                let _ = event_tx.send(GameEvent::MoveApplied {
                    mark: Mark::O,
                    position,
                });
                if let Some(outcome) = view.status.outcome() {
                    let _ = event_tx.send(GameEvent::GameOver { outcome });
                }
            }
        }));
    }

    fn send(&self, event: GameEvent) {
        // The receiver may already be gone during shutdown; that is fine.
        let _ = self.event_tx.send(event);
    }
}

impl Drop for GameSession {
    /// Aborts any in-flight AI task so it cannot outlive the session.
    fn drop(&mut self) {
        if let Some(pending) = self.pending_ai.take() {
            pending.abort();
        }
    }
}

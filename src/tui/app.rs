//! Application state: the session plus cursor and status narration.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use crate::engine::{GameView, Mark, Outcome};
use crate::session::{GameEvent, GameSession};

/// Interactive state behind the renderer: the game session, the keyboard
/// cursor, and the one-line status message.
pub struct App {
    session: GameSession,
    cursor: usize,
    status_message: String,
}

impl App {
    /// Creates the app around a fresh session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            // Start on the center cell.
            cursor: 4,
            status_message: "You are X. Pick a cell: 1-9, arrows + Enter, or click.".to_string(),
        }
    }

    /// Snapshot of the game state for rendering.
    pub fn view(&self) -> GameView {
        self.session.snapshot()
    }

    /// The keyboard cursor's cell, 0 through 8.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Applies a session event to the status line.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        self.status_message = match event {
            GameEvent::MoveApplied {
                mark: Mark::X,
                position,
            } => format!("You took cell {}.", position + 1),
            GameEvent::MoveApplied {
                mark: Mark::O,
                position,
            } => format!("AI took cell {}. Your move.", position + 1),
            GameEvent::AiThinking => "AI is thinking...".to_string(),
            GameEvent::GameOver { outcome } => match outcome {
                Outcome::Won(Mark::X) => "You win! Press 'r' for a new round.".to_string(),
                Outcome::Won(Mark::O) => "AI wins! Press 'r' for a new round.".to_string(),
                Outcome::Draw => "A draw! Press 'r' for a new round.".to_string(),
            },
            GameEvent::BoardReset => "New round. You are X - pick a cell.".to_string(),
        };
    }

    /// Handles board input: digit keys place directly, arrows move the
    /// cursor, Enter and Space place at the cursor.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c as usize - '0' as usize;
                if (1..=9).contains(&digit) {
                    self.cursor = digit - 1;
                    self.session.play(digit - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.session.play(self.cursor),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = moved_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a left click, given this frame's cell rectangles.
    #[instrument(skip(self, cells))]
    pub fn handle_click(&mut self, column: u16, row: u16, cells: &[Rect; 9]) {
        if let Some(pos) = cells.iter().position(|cell| hit(*cell, column, row)) {
            debug!(pos, "Cell clicked");
            self.cursor = pos;
            self.session.play(pos);
        }
    }

    /// Starts a new round. The score tally survives.
    pub fn reset(&mut self) {
        debug!("New round requested");
        self.session.reset();
    }
}

/// Arrow-key movement on the 3x3 grid, clamped at the edges.
fn moved_cursor(cursor: usize, code: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match code {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    row * 3 + col
}

fn hit(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

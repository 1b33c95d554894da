//! Terminal UI: draws engine snapshots, forwards input as move intents.
//!
//! The TUI owns no game logic. Keys and clicks become [`GameSession`]
//! calls, session events become status-line text, and every frame is
//! rendered from a fresh [`crate::engine::GameView`] snapshot.

mod app;
mod ui;

pub use app::App;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::session::{GameEvent, GameSession};

/// Runs the interactive game until the user quits.
///
/// Owns the terminal for its whole lifetime: raw mode and the alternate
/// screen are restored before returning, error or not. Logs go to
/// `log_file` because stdout belongs to the interface.
pub async fn run(log_file: &Path, ai_delay: Duration) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?ai_delay, "Starting tictactui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let session = GameSession::new(event_tx, ai_delay);
    let app = App::new(session);

    let res = run_app(&mut terminal, app, event_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Drives the draw / session-event / input cycle at roughly 10Hz.
#[instrument(skip_all)]
async fn run_app<B>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let frame_area = terminal.draw(|f| ui::draw(f, &app))?.area;
        let cells = ui::cell_rects(frame_area);

        // Session events only steer the status line; board state always
        // comes from the snapshot drawn above.
        while let Ok(game_event) = event_rx.try_recv() {
            app.handle_event(game_event);
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => {
                            info!("User quit");
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
                        code => app.handle_key(code),
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => app.handle_click(column, row, &cells),
                _ => {}
            }
        }
    }
}

//! Stateless rendering: title, status line, board grid, tally, key help.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::rc::Rc;

use crate::engine::{Cell, GameView, Mark};
use crate::tui::app::App;

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders the whole frame from the app's current snapshot.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let chunks = outer_chunks(frame.area());

    draw_title(frame, chunks[0]);
    draw_status(frame, chunks[1], app.status_message());
    draw_board(frame, chunks[2], &view, app.cursor());
    draw_tally(frame, chunks[3], &view);
    draw_help(frame, chunks[4]);
}

/// Screen rectangles of the nine cells for a frame of the given area,
/// used for mouse hit-testing. Shares its layout math with [`draw`].
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let chunks = outer_chunks(area);
    let board_area = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
    let rows = row_chunks(board_area);
    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = col_chunks(row_area);
        for (c, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell_area;
        }
    }
    cells
}

fn outer_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Length(3),         // Status line
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Tally
            Constraint::Length(1),         // Key help
        ])
        .split(area)
}

fn row_chunks(board_area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
}

fn col_chunks(row_area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row_area)
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_status(frame: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: usize) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = row_chunks(board_area);
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = col_chunks(row_area);
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
        for (c, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            draw_cell(frame, cell_area, view, r * 3 + c, cursor);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, pos: usize, cursor: usize) {
    let (symbol, base_style) = match view.board.cells()[pos] {
        Cell::Empty => (
            format!(" {} ", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view.status.is_terminal() {
        base_style.add_modifier(Modifier::DIM)
    } else if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Leading blank line drops the symbol onto the middle row of the cell.
    let text = Text::from(vec![Line::raw(""), Line::from(Span::styled(symbol, style))]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let bars = vec![Line::raw("│"); area.height as usize];
    let sep = Paragraph::new(Text::from(bars)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_tally(frame: &mut Frame, area: Rect, view: &GameView) {
    let tally = view.tally;
    let summary = format!(
        "You (X): {}   AI (O): {}   Draws: {}   Rounds: {}",
        tally.x_wins(),
        tally.o_wins(),
        tally.draws(),
        tally.total()
    );
    let score = Paragraph::new(summary)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(score, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "1-9 or click: place mark   arrows + Enter: move cursor   r: new round   q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

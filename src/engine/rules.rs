//! Win and draw detection.

use super::types::{Board, Cell, GameStatus, Mark};
use tracing::instrument;

/// The eight winning lines in their fixed evaluation order: rows top to
/// bottom, columns left to right, then the two diagonals.
///
/// Win detection and the AI selector share this table, so both scan
/// lines in the same order.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// Checks the board for a completed line.
///
/// Lines are scanned in [`LINES`] order and the first complete one names
/// the winner. Legal play can never complete lines for both marks, so the
/// scan order is only observable to synthetic boards.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Occupied(mark) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(mark);
        }
    }
    None
}

/// Derives the game status from the board alone.
///
/// A completed line takes precedence over a full board, so a win on the
/// ninth move reports `Won`, not `Draw`.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Won(mark)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), None);
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn detects_each_row() {
        for row in 0..3 {
            let base = row * 3;
            let board = board_with(&[
                (base, Mark::X),
                (base + 1, Mark::X),
                (base + 2, Mark::X),
            ]);
            assert_eq!(winner(&board), Some(Mark::X), "row starting at {base}");
        }
    }

    #[test]
    fn detects_each_column() {
        for col in 0..3 {
            let board = board_with(&[
                (col, Mark::O),
                (col + 3, Mark::O),
                (col + 6, Mark::O),
            ]);
            assert_eq!(winner(&board), Some(Mark::O), "column starting at {col}");
        }
    }

    #[test]
    fn detects_both_diagonals() {
        let main = board_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        let anti = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(winner(&main), Some(Mark::X));
        assert_eq!(winner(&anti), Some(Mark::O));
    }

    #[test]
    fn two_in_a_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // X X O / O O X / X O X
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::O),
            (4, Mark::O),
            (5, Mark::X),
            (6, Mark::X),
            (7, Mark::O),
            (8, Mark::X),
        ]);
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn win_on_a_full_board_beats_draw() {
        // X X X / O O X / O X O
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ]);
        assert_eq!(evaluate(&board), GameStatus::Won(Mark::X));
    }

    #[test]
    fn first_complete_line_in_table_order_names_the_winner() {
        // Synthetic double win: X owns the top row, O owns the bottom row.
        // The top row sits earlier in the table, so X is reported.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::O),
        ]);
        assert_eq!(winner(&board), Some(Mark::X));
    }
}

//! Heuristic move selection for the AI opponent.
//!
//! One-ply tactical rule: take the first line slot that would finish a
//! three-in-a-row for either mark, otherwise play a uniformly random
//! empty cell. No lookahead, so forks go unanswered on purpose.

use super::rules::LINES;
use super::types::{Board, Cell};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks the AI's next move, or `None` when the board is full.
///
/// Lines are scanned in the same fixed order win detection uses, and
/// within a line the three slots are tried first to last. A slot is taken
/// the moment its two line-mates hold the same mark, whichever mark that
/// is: completing the AI's own line and blocking the human's are the same
/// shape, so the earliest match in scan order settles any conflict
/// between them. Without a tactical slot the fallback is a uniform
/// random choice among the empty cells, driven by `rng`.
#[instrument(level = "debug", skip(rng))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    if let Some(pos) = tactical_move(board) {
        debug!(pos, "Tactical slot found");
        return Some(pos);
    }

    let open = board.empty_positions();
    let choice = open.choose(rng).copied();
    debug!(?choice, candidates = open.len(), "Falling back to a random cell");
    choice
}

/// Scans the line table for an empty slot whose two line-mates match.
fn tactical_move(board: &Board) -> Option<usize> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        for (slot, (m1, m2)) in [(a, (b, c)), (b, (a, c)), (c, (a, b))] {
            if cells[slot] == Cell::Empty
                && cells[m1] != Cell::Empty
                && cells[m1] == cells[m2]
            {
                return Some(slot);
            }
        }
    }
    None
}

//! Engine behavior: alternation, silent rejects, terminal transitions,
//! tally accounting and reset semantics.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactui::{Cell, Game, GameStatus, Mark};

fn first_empty(game: &Game) -> usize {
    game.board()
        .cells()
        .iter()
        .position(|cell| *cell == Cell::Empty)
        .expect("an in-progress board has an empty cell")
}

fn mark_count(game: &Game, mark: Mark) -> usize {
    game.board()
        .cells()
        .iter()
        .filter(|cell| **cell == Cell::Occupied(mark))
        .count()
}

#[test]
fn test_new_game_starts_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.board().cells().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(game.tally().total(), 0);
}

#[test]
fn test_turn_flips_on_every_successful_move() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Game::new();
    while game.status() == GameStatus::InProgress {
        let mover = game.turn();
        if mover == Mark::X {
            game.apply_move(first_empty(&game));
        } else {
            let _ = game.apply_ai_move(&mut rng);
        }
        assert_eq!(game.turn(), mover.opponent(), "turn must flip after a move");
    }
}

#[test]
fn test_move_onto_an_occupied_cell_changes_nothing() {
    // X center, O corner; X to move again.
    let mut game = Game::replay(&[4, 0]);
    let before = game.clone();
    game.apply_move(0);
    assert_eq!(game, before);
    game.apply_move(4);
    assert_eq!(game, before);
}

#[test]
fn test_move_while_it_is_not_the_humans_turn_changes_nothing() {
    let mut game = Game::new();
    game.apply_move(0);
    assert_eq!(game.turn(), Mark::O);
    let before = game.clone();
    game.apply_move(5);
    assert_eq!(game, before, "only X moves through apply_move");
}

#[test]
fn test_out_of_range_positions_change_nothing() {
    let mut game = Game::new();
    let before = game.clone();
    game.apply_move(9);
    game.apply_move(usize::MAX);
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_the_game_ends_change_nothing() {
    // X takes the left column: X 0, O 4, X 3, O 5, X 6.
    let mut game = Game::replay(&[0, 4, 3, 5, 6]);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    let before = game.clone();
    game.apply_move(1);
    game.apply_move(8);
    assert_eq!(game, before, "a finished game accepts no moves");
    assert_eq!(*game.tally().x_wins(), 1, "the tally settles exactly once");
}

#[test]
fn test_x_win_is_detected_and_tallied() {
    let mut game = Game::replay(&[0, 4, 3, 5]);
    assert_eq!(game.status(), GameStatus::InProgress);
    game.apply_move(6);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.turn(), Mark::O, "the turn still flips on the winning move");
    assert_eq!(*game.tally().x_wins(), 1);
    assert_eq!(*game.tally().o_wins(), 0);
    assert_eq!(*game.tally().draws(), 0);
}

#[test]
fn test_o_win_is_detected_and_tallied() {
    // O takes the middle row: X 0, O 3, X 1, O 4, X 8, O 5.
    let game = Game::replay(&[0, 3, 1, 4, 8, 5]);
    assert_eq!(game.status(), GameStatus::Won(Mark::O));
    assert_eq!(*game.tally().o_wins(), 1);
}

#[test]
fn test_draw_is_detected_and_tallied() {
    // Full board, no line: X 0, O 4, X 2, O 1, X 3, O 5, X 7, O 6, X 8.
    let game = Game::replay(&[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(*game.tally().draws(), 1);
    assert_eq!(game.tally().total(), 1);
}

#[test]
fn test_win_on_the_ninth_move_is_a_win_not_a_draw() {
    // X completes the main diagonal with the final cell of the board.
    let game = Game::replay(&[0, 1, 4, 2, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(*game.tally().x_wins(), 1);
    assert_eq!(*game.tally().draws(), 0);
}

#[test]
fn test_reset_clears_the_board_and_keeps_the_tally() {
    let mut game = Game::replay(&[0, 4, 3, 5, 6]);
    assert_eq!(*game.tally().x_wins(), 1);

    game.reset();
    assert!(game.board().cells().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(*game.tally().x_wins(), 1, "reset never touches the tally");
}

#[test]
fn test_every_finished_round_moves_the_tally_total_once() {
    let mut game = Game::replay(&[0, 4, 3, 5, 6]);
    assert_eq!(game.tally().total(), 1);

    game.reset();
    let mut rng = StdRng::seed_from_u64(11);
    while game.status() == GameStatus::InProgress {
        if game.turn() == Mark::X {
            game.apply_move(first_empty(&game));
        } else {
            let _ = game.apply_ai_move(&mut rng);
        }
    }
    assert_eq!(game.tally().total(), 2);
}

#[test]
fn test_replay_drops_illegal_moves_without_consuming_a_turn() {
    let game = Game::replay(&[0, 0, 9, 4]);
    assert_eq!(game.board().get(0), Some(Cell::Occupied(Mark::X)));
    assert_eq!(game.board().get(4), Some(Cell::Occupied(Mark::O)));
    assert_eq!(mark_count(&game, Mark::X), 1);
    assert_eq!(mark_count(&game, Mark::O), 1);
    assert_eq!(game.turn(), Mark::X);
}

#[test]
fn test_view_snapshot_mirrors_the_accessors() {
    let game = Game::replay(&[4, 0, 8]);
    let view = game.view();
    assert_eq!(view.board, game.board());
    assert_eq!(view.turn, game.turn());
    assert_eq!(view.status, game.status());
    assert_eq!(view.tally, game.tally());
}

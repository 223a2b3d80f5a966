//! Rules engine scenarios: whole games driven through the public API.

use three_mens_morris::core::{Board, GamePhase, GameState, Player, Position};
use three_mens_morris::rules::{
    apply_move, apply_placement, check_win, is_adjacent, reset, select_piece, WIN_LINES,
};
use three_mens_morris::RuleViolation;

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn play_placements(cells: &[(u8, u8)]) -> GameState {
    cells.iter().fold(reset(), |state, &(r, c)| {
        apply_placement(&state, state.turn(), pos(r, c)).unwrap()
    })
}

/// X completes the top row during placement.
#[test]
fn test_placement_win_scenario() {
    let state = play_placements(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(
        check_win(state.board(), Player::X).map(|l| l.cells()),
        Some([pos(0, 0), pos(0, 1), pos(0, 2)])
    );
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.winning_line(), check_win(state.board(), Player::X));
}

/// Six placements without a line move the game into Movement on their own.
#[test]
fn test_automatic_movement_phase() {
    let mut state = reset();
    let cells = [(0, 0), (0, 1), (0, 2), (1, 0), (2, 1), (2, 2)];

    for (i, &(r, c)) in cells.iter().enumerate() {
        assert_eq!(state.phase(), GamePhase::Placement, "before placement {i}");
        state = apply_placement(&state, state.turn(), pos(r, c)).unwrap();
    }

    assert_eq!(state.phase(), GamePhase::Movement);
    assert_eq!(state.turn(), Player::X);
    assert_eq!(
        state.inventory(Player::X).on_board(),
        &[pos(0, 0), pos(0, 2), pos(2, 1)]
    );
    assert_eq!(
        state.inventory(Player::O).on_board(),
        &[pos(0, 1), pos(1, 0), pos(2, 2)]
    );
}

/// Selection during Movement: no-ops, selecting, and a rejected move that
/// keeps the selection.
#[test]
fn test_selection_scenario() {
    let state = play_placements(&[(0, 0), (0, 1), (0, 2), (1, 0), (2, 1), (2, 2)]);

    let unchanged = select_piece(&state, Player::X, pos(1, 1)).unwrap();
    assert_eq!(unchanged, state);

    let selected = select_piece(&state, Player::X, pos(0, 0)).unwrap();
    assert_eq!(selected.selected(), Some(pos(0, 0)));

    assert_eq!(
        apply_move(&selected, Player::X, pos(0, 0), pos(2, 0)),
        Err(RuleViolation::NotAdjacent)
    );
    assert_eq!(selected.selected(), Some(pos(0, 0)));
}

/// Alternating slides ending in a movement-phase win.
#[test]
fn test_movement_win_scenario() {
    let board: Board = "O.O/X.O/.XX".parse().unwrap();
    let mut state = GameState::from_board(board, Player::O).unwrap();
    assert_eq!(state.phase(), GamePhase::Movement);

    state = apply_move(&state, Player::O, pos(0, 0), pos(0, 1)).unwrap();
    assert_eq!(state.turn(), Player::X);
    assert!(state.winner().is_none());

    state = apply_move(&state, Player::X, pos(1, 0), pos(2, 0)).unwrap();
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(
        state.winning_line().map(|l| l.cells()),
        Some([pos(2, 0), pos(2, 1), pos(2, 2)])
    );
    assert_eq!(
        apply_move(&state, Player::O, pos(0, 1), pos(1, 1)),
        Err(RuleViolation::WrongPhase)
    );
}

/// Placing on an occupied cell changes nothing.
#[test]
fn test_occupied_cell_leaves_board_identical() {
    let state = play_placements(&[(1, 1)]);
    let board_before: Board = *state.board();

    assert_eq!(
        apply_placement(&state, Player::O, pos(1, 1)),
        Err(RuleViolation::CellOccupied)
    );
    assert_eq!(state.board(), &board_before);
    assert_eq!(state.board().to_string(), ".../.X./...".replace('/', "\n"));
}

/// Both a row and a column complete: the row is reported.
#[test]
fn test_first_line_wins_tie() {
    let board: Board = "XXX/X../X..".parse().unwrap();
    assert_eq!(check_win(&board, Player::X), Some(WIN_LINES[0]));
}

/// Adjacency is morris-style, not king-move.
#[test]
fn test_adjacency_contract() {
    for p in Position::all().filter(|&p| p != Position::CENTER) {
        assert!(is_adjacent(Position::CENTER, p));
    }
    assert!(!is_adjacent(pos(0, 0), pos(0, 2)));
    assert!(!is_adjacent(pos(0, 0), pos(0, 0)));
    assert!(!is_adjacent(pos(0, 1), pos(1, 2)));
}

/// Two resets are indistinguishable.
#[test]
fn test_reset_idempotent() {
    assert_eq!(reset(), reset());
    assert_eq!(reset(), GameState::new());
}

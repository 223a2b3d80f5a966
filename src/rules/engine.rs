//! State transitions: placement, selection, movement, reset.
//!
//! Every operation takes the current state by reference and returns either
//! a complete new state or a `RuleViolation`. The input is never modified,
//! so a rejected action leaves the caller exactly where it was.
//!
//! ## Check order
//!
//! - `apply_placement`: phase, turn, cell empty, pieces left
//! - `select_piece`: phase, turn
//! - `apply_move`: phase, turn, source is own piece, target empty, adjacency

use tracing::{debug, info, instrument};

use super::adjacency::{is_adjacent, neighbours};
use super::lines::check_win;
use crate::core::{Action, Board, GamePhase, GameState, Player, Position, Victory};
use crate::error::RuleViolation;

/// A fresh game: empty board, Placement, X to move.
#[must_use]
pub fn reset() -> GameState {
    GameState::new()
}

fn ensure(condition: bool, violation: RuleViolation) -> Result<(), RuleViolation> {
    if condition {
        Ok(())
    } else {
        debug!(%violation, "action rejected");
        Err(violation)
    }
}

/// Record a win for `player`, or pass the turn.
fn conclude_turn(next: &mut GameState, player: Player) {
    if let Some(line) = check_win(&next.board, player) {
        info!(winner = %player, cells = ?line.cells(), "game over");
        next.phase = GamePhase::GameOver;
        next.outcome = Some(Victory { winner: player, line });
    } else {
        next.turn = player.other();
    }
}

/// Drop one of `player`'s pieces on an empty cell.
#[instrument(level = "debug", skip(state))]
pub fn apply_placement(
    state: &GameState,
    player: Player,
    pos: Position,
) -> Result<GameState, RuleViolation> {
    ensure(state.phase == GamePhase::Placement, RuleViolation::WrongPhase)?;
    ensure(state.turn == player, RuleViolation::NotYourTurn)?;
    ensure(state.board.is_empty_at(pos), RuleViolation::CellOccupied)?;
    ensure(state.inventories[player].to_place() > 0, RuleViolation::NoPiecesLeft)?;

    let mut next = state.clone();
    next.board.set(pos, Some(player));
    next.inventories[player].place(pos);
    conclude_turn(&mut next, player);

    // Depends on both hands, not on who just placed.
    if next.phase == GamePhase::Placement && next.inventories.all(|inv| inv.to_place() == 0) {
        debug!("all pieces placed, entering movement phase");
        next.phase = GamePhase::Movement;
    }

    Ok(next)
}

/// Pick up one of `player`'s pieces for a following `apply_move`.
///
/// Pointing at a cell that does not hold `player`'s mark leaves the state
/// as it is; it is not an error.
#[instrument(level = "debug", skip(state))]
pub fn select_piece(
    state: &GameState,
    player: Player,
    pos: Position,
) -> Result<GameState, RuleViolation> {
    ensure(state.phase == GamePhase::Movement, RuleViolation::WrongPhase)?;
    ensure(state.turn == player, RuleViolation::NotYourTurn)?;

    let mut next = state.clone();
    if state.board[pos] == Some(player) {
        next.selected = Some(pos);
    }
    Ok(next)
}

/// Drop the current selection, if any.
#[must_use]
pub fn clear_selection(state: &GameState) -> GameState {
    GameState {
        selected: None,
        ..state.clone()
    }
}

/// Slide `player`'s piece from `from` to the adjacent empty cell `to`.
#[instrument(level = "debug", skip(state))]
pub fn apply_move(
    state: &GameState,
    player: Player,
    from: Position,
    to: Position,
) -> Result<GameState, RuleViolation> {
    ensure(state.phase == GamePhase::Movement, RuleViolation::WrongPhase)?;
    ensure(state.turn == player, RuleViolation::NotYourTurn)?;
    ensure(state.board[from] == Some(player), RuleViolation::NotYourPiece)?;
    ensure(state.board.is_empty_at(to), RuleViolation::CellOccupied)?;
    ensure(is_adjacent(from, to), RuleViolation::NotAdjacent)?;

    let mut next = state.clone();
    next.board = state.board.with_move(from, to, player);
    next.inventories[player].relocate(from, to);
    next.selected = None;
    conclude_turn(&mut next, player);

    Ok(next)
}

/// Apply either kind of action.
pub fn apply_action(
    state: &GameState,
    player: Player,
    action: Action,
) -> Result<GameState, RuleViolation> {
    match action {
        Action::Place(pos) => apply_placement(state, player, pos),
        Action::Move { from, to } => apply_move(state, player, from, to),
    }
}

/// Every slide available to `pieces` on `board`: pieces in the given order,
/// then neighbours in adjacency order, empty targets only.
pub fn slides<'a>(board: &'a Board, pieces: &'a [Position]) -> impl Iterator<Item = Action> + 'a {
    pieces.iter().flat_map(move |&from| {
        neighbours(from)
            .iter()
            .filter(move |&&to| board.is_empty_at(to))
            .map(move |&to| Action::Move { from, to })
    })
}

/// Actions `player` may take right now.
///
/// Empty when the game is over or it is not `player`'s turn.
#[must_use]
pub fn legal_actions(state: &GameState, player: Player) -> Vec<Action> {
    if state.turn != player {
        return Vec::new();
    }

    let inventory = &state.inventories[player];
    match state.phase {
        GamePhase::Placement if inventory.to_place() > 0 => {
            state.board.empty_positions().map(Action::Place).collect()
        }
        GamePhase::Movement => slides(&state.board, inventory.on_board()).collect(),
        _ => Vec::new(),
    }
}

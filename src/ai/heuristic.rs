//! Fixed-priority heuristic opponent.
//!
//! Tiers, each searched completely before falling through:
//!
//! 1. Win now: the first own action that completes a line.
//! 2. Block: the first opponent action that would complete a line; occupy
//!    its target (place there, or slide an adjacent piece there).
//! 3. Placement only: take the center, else a random empty cell.
//! 4. Movement only: a random legal slide.
//!
//! Scan order is row-major for placements and piece order then adjacency
//! order for slides. The block tier looks one move ahead only: if no own
//! piece is already next to the threatened cell it gives up on that threat.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Action, Board, GamePhase, GameRng, GameState, Player, Position};
use crate::rules::{check_win, is_adjacent, slides};

/// Choose an action for `computer` without applying it.
///
/// Returns `None` when the game is over or the computer has nothing to do
/// in the current phase.
///
/// ```
/// use three_mens_morris::ai::select_action;
/// use three_mens_morris::core::{Action, GameRng, Player, Position};
/// use three_mens_morris::rules::{apply_placement, reset};
///
/// let state = apply_placement(&reset(), Player::X, Position::new(0, 0)).unwrap();
/// let mut rng = GameRng::new(1);
///
/// let action = select_action(&state, Player::O, Player::X, &mut rng);
/// assert_eq!(action, Some(Action::Place(Position::CENTER)));
/// ```
#[must_use]
pub fn select_action(
    state: &GameState,
    computer: Player,
    human: Player,
    rng: &mut GameRng,
) -> Option<Action> {
    match state.phase() {
        GamePhase::Placement => select_placement(state, computer, human, rng),
        GamePhase::Movement => select_slide(state, computer, human, rng),
        GamePhase::GameOver => None,
    }
}

/// True if `player` taking `action` on `board` completes a line.
fn completes_line(board: &Board, action: Action, player: Player) -> bool {
    let next = match action.source() {
        None => board.with_placement(action.target(), player),
        Some(from) => board.with_move(from, action.target(), player),
    };
    check_win(&next, player).is_some()
}

fn select_placement(
    state: &GameState,
    computer: Player,
    human: Player,
    rng: &mut GameRng,
) -> Option<Action> {
    if state.inventory(computer).to_place() == 0 {
        return None;
    }

    let board = state.board();
    let empty: SmallVec<[Position; 9]> = board.empty_positions().collect();

    if let Some(&pos) = empty
        .iter()
        .find(|&&pos| completes_line(board, Action::Place(pos), computer))
    {
        trace!(%pos, "placing to win");
        return Some(Action::Place(pos));
    }

    // Counts even when the human's hand is already empty.
    if let Some(&pos) = empty
        .iter()
        .find(|&&pos| completes_line(board, Action::Place(pos), human))
    {
        trace!(%pos, "placing to block");
        return Some(Action::Place(pos));
    }

    if board.is_empty_at(Position::CENTER) {
        trace!("taking the center");
        return Some(Action::Place(Position::CENTER));
    }

    rng.choose(&empty).copied().map(Action::Place)
}

fn select_slide(
    state: &GameState,
    computer: Player,
    human: Player,
    rng: &mut GameRng,
) -> Option<Action> {
    let board = state.board();
    let own = state.inventory(computer).on_board();

    if let Some(action) = slides(board, own).find(|&a| completes_line(board, a, computer)) {
        trace!(%action, "sliding to win");
        return Some(action);
    }

    let threats = slides(board, state.inventory(human).on_board())
        .filter(|&a| completes_line(board, a, human));
    for threat in threats {
        let target = threat.target();
        if let Some(&from) = own.iter().find(|&&from| is_adjacent(from, target)) {
            trace!(%target, %from, "sliding to block");
            return Some(Action::Move { from, to: target });
        }
        trace!(%target, "threat out of reach");
    }

    let candidates: SmallVec<[Action; 8]> = slides(board, own).collect();
    rng.choose(&candidates).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_actions;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn state(board: &str, turn: Player) -> GameState {
        GameState::from_board(board.parse().unwrap(), turn).unwrap()
    }

    fn pick(state: &GameState, seed: u64) -> Option<Action> {
        select_action(state, Player::O, Player::X, &mut GameRng::new(seed))
    }

    #[test]
    fn test_placement_win_beats_block() {
        let s = state("XX./OO./..X", Player::O);
        assert_eq!(pick(&s, 0), Some(Action::Place(pos(1, 2))));
    }

    #[test]
    fn test_placement_block() {
        let s = state("XX./.O./...", Player::O);
        assert_eq!(pick(&s, 0), Some(Action::Place(pos(0, 2))));
    }

    #[test]
    fn test_placement_block_when_human_hand_empty() {
        // X has all three down; row 0 and the diagonal are both open
        let s = state("XX./O../O.X", Player::O);
        assert_eq!(s.phase(), GamePhase::Placement);
        assert_eq!(pick(&s, 0), Some(Action::Place(pos(0, 2))));
    }

    #[test]
    fn test_placement_center() {
        let s = state("X../.../...", Player::O);
        assert_eq!(pick(&s, 0), Some(Action::Place(Position::CENTER)));
    }

    #[test]
    fn test_placement_random_when_center_taken() {
        let s = state(".../.X./...", Player::O);

        for seed in 0..20 {
            let action = pick(&s, seed).unwrap();
            assert_ne!(action.target(), Position::CENTER);
            assert!(legal_actions(&s, Player::O).contains(&action));
            assert_eq!(pick(&s, seed), Some(action));
        }
    }

    #[test]
    fn test_placement_nothing_to_place() {
        let s = state("OO./X.O/X..", Player::O);
        assert_eq!(pick(&s, 0), None);
    }

    #[test]
    fn test_slide_win() {
        // (0,0) -> (1,0) is tried first but vacates the column
        let s = state("OX./.OX/O.X", Player::O);
        assert_eq!(
            pick(&s, 0),
            Some(Action::Move {
                from: pos(1, 1),
                to: pos(1, 0)
            })
        );
    }

    #[test]
    fn test_slide_block() {
        // X threatens (1,2) -> (0,2); O's center piece can get there first
        let s = state("XX./OOX/..O", Player::O);
        assert_eq!(
            pick(&s, 0),
            Some(Action::Move {
                from: pos(1, 1),
                to: pos(0, 2)
            })
        );
    }

    #[test]
    fn test_slide_block_out_of_reach_falls_back_to_random() {
        // X threatens (1,2) -> (0,2); no O piece borders (0,2)
        let s = state("XX./O.X/OO.", Player::O);
        let legal = legal_actions(&s, Player::O);

        for seed in 0..20 {
            let expected = GameRng::new(seed).choose(&legal).copied();
            assert_eq!(pick(&s, seed), expected);
        }
    }

    #[test]
    fn test_slide_block_skips_unreachable_threat() {
        // X threatens (0,0) -> (1,0) first, then (1,2) -> (2,2).
        // Nothing of O's borders (1,0); (2,1) borders (2,2).
        let s = state("XOO/.XX/.O.", Player::O);

        for seed in 0..10 {
            assert_eq!(
                pick(&s, seed),
                Some(Action::Move {
                    from: pos(2, 1),
                    to: pos(2, 2)
                })
            );
        }
    }

    #[test]
    fn test_slide_win_bypasses_reachable_block() {
        // O's center borders the threatened (0,2), but (1,1) -> (2,1) wins
        let s = state("XX./.OX/O.O", Player::O);
        assert!(legal_actions(&s, Player::O).contains(&Action::Move {
            from: pos(1, 1),
            to: pos(0, 2)
        }));
        assert_eq!(
            pick(&s, 0),
            Some(Action::Move {
                from: pos(1, 1),
                to: pos(2, 1)
            })
        );
    }

    #[test]
    fn test_game_over_yields_nothing() {
        let s = state("XXX/OO./...", Player::X);
        assert!(s.is_over());
        assert_eq!(pick(&s, 0), None);
    }

    #[test]
    fn test_plays_either_side() {
        let s = state("OO./.X./...", Player::X);
        let action = select_action(&s, Player::X, Player::O, &mut GameRng::new(0));
        assert_eq!(action, Some(Action::Place(pos(0, 2))));
    }
}

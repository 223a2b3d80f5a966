//! What a front end shows: the prompt line and per-cell highlights.

use serde::{Deserialize, Serialize};

use crate::core::{GamePhase, GameState, Player, Position};
use crate::rules::is_adjacent;

/// Prompt for the current moment of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Won(Player),
    Place { player: Player, remaining: u8 },
    SelectPiece(Player),
    MoveSelected(Player),
}

impl Status {
    /// Prompt derived from `state`.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let player = state.turn();
        match (state.winner(), state.phase()) {
            (Some(winner), _) => Status::Won(winner),
            (None, GamePhase::Placement) => Status::Place {
                player,
                remaining: state.inventory(player).to_place(),
            },
            (None, _) if state.selected().is_some() => Status::MoveSelected(player),
            (None, _) => Status::SelectPiece(player),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won(p) => write!(f, "Player {p} wins!"),
            Status::Place { player, remaining } => {
                write!(f, "Player {player}, place your piece. ({remaining} left)")
            }
            Status::SelectPiece(p) => write!(f, "Player {p}, select a piece to move."),
            Status::MoveSelected(p) => write!(f, "Player {p}, move to an adjacent empty spot."),
        }
    }
}

/// Highlight flags for one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellHint {
    /// Clicking here would do something useful.
    pub selectable: bool,
    /// This is the piece currently picked up.
    pub selected: bool,
    /// Part of the winning line.
    pub winning: bool,
}

impl CellHint {
    /// Hint for `pos`. `interactive` is false while the computer is to move,
    /// which suppresses everything except the winning line.
    #[must_use]
    pub fn of(state: &GameState, pos: Position, interactive: bool) -> Self {
        let mut hint = CellHint {
            winning: state.winning_line().is_some_and(|line| line.contains(pos)),
            ..CellHint::default()
        };
        if state.is_over() || !interactive {
            return hint;
        }

        let player = state.turn();
        let board = state.board();
        match (state.phase(), state.selected()) {
            (GamePhase::Movement, Some(sel)) if sel == pos => hint.selected = true,
            (GamePhase::Movement, Some(sel)) => {
                hint.selectable = board.is_empty_at(pos) && is_adjacent(sel, pos);
            }
            (GamePhase::Movement, None) => hint.selectable = board[pos] == Some(player),
            (GamePhase::Placement, _) => {
                hint.selectable = board.is_empty_at(pos) && state.inventory(player).to_place() > 0;
            }
            (GamePhase::GameOver, _) => {}
        }
        hint
    }
}

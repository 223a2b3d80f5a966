//! Action representation.
//!
//! An action is either dropping a new piece during placement or sliding an
//! existing piece along an adjacency edge during movement. Both the human's
//! clicks and the computer's choices end up as an `Action` applied through
//! the rules engine.

use serde::{Deserialize, Serialize};

use super::board::Position;

/// A complete game action.
///
/// ```
/// use three_mens_morris::core::{Action, Position};
///
/// let place = Action::Place(Position::CENTER);
/// let slide = Action::Move { from: Position::new(0, 0), to: Position::new(0, 1) };
///
/// assert_eq!(place.target(), Position::CENTER);
/// assert_eq!(slide.target(), Position::new(0, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a new piece on an empty cell.
    Place(Position),
    /// Slide a piece to an adjacent empty cell.
    Move { from: Position, to: Position },
}

impl Action {
    /// The cell this action occupies.
    #[must_use]
    pub const fn target(self) -> Position {
        match self {
            Action::Place(pos) => pos,
            Action::Move { to, .. } => to,
        }
    }

    /// The cell vacated by this action, if any.
    #[must_use]
    pub const fn source(self) -> Option<Position> {
        match self {
            Action::Place(_) => None,
            Action::Move { from, .. } => Some(from),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "place {pos}"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}

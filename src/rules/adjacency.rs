//! Morris-style adjacency graph.
//!
//! Pieces slide along the drawn lines of the board, not to any of the eight
//! surrounding cells:
//!
//! ```text
//! (0,0)-(0,1)-(0,2)
//!   |  \  |  /  |
//! (1,0)-(1,1)-(1,2)
//!   |  /  |  \  |
//! (2,0)-(2,1)-(2,2)
//! ```
//!
//! The center reaches every other cell; edge midpoints reach their two
//! in-line neighbours and the center; corners reach their two orthogonal
//! neighbours and the center. Corner-to-corner and midpoint-to-midpoint are
//! never adjacent.
//!
//! Neighbour order is part of the contract: the computer opponent scans it
//! when several moves are equally good.

use crate::core::Position;

const fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// Neighbours of each cell, indexed by `Position::index()`.
static ADJACENCY: [&[Position]; 9] = [
    // (0,0)
    &[p(0, 1), p(1, 0), p(1, 1)],
    // (0,1)
    &[p(0, 0), p(0, 2), p(1, 1)],
    // (0,2)
    &[p(0, 1), p(1, 2), p(1, 1)],
    // (1,0)
    &[p(0, 0), p(2, 0), p(1, 1)],
    // (1,1)
    &[
        p(0, 0),
        p(0, 1),
        p(0, 2),
        p(1, 0),
        p(1, 2),
        p(2, 0),
        p(2, 1),
        p(2, 2),
    ],
    // (1,2)
    &[p(0, 2), p(2, 2), p(1, 1)],
    // (2,0)
    &[p(1, 0), p(2, 1), p(1, 1)],
    // (2,1)
    &[p(2, 0), p(2, 2), p(1, 1)],
    // (2,2)
    &[p(1, 2), p(2, 1), p(1, 1)],
];

/// Cells reachable from `pos` in one move, in stored order.
#[must_use]
pub fn neighbours(pos: Position) -> &'static [Position] {
    ADJACENCY[pos.index()]
}

/// True if a piece on `a` may slide to `b`.
///
/// ```
/// use three_mens_morris::core::Position;
/// use three_mens_morris::rules::is_adjacent;
///
/// assert!(is_adjacent(Position::CENTER, Position::new(2, 0)));
/// assert!(!is_adjacent(Position::new(0, 0), Position::new(0, 2)));
/// ```
#[must_use]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a != b && neighbours(a).contains(&b)
}

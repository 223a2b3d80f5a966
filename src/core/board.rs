//! Board geometry: positions, cells and the 3x3 grid.
//!
//! The board is stored row-major as nine `Cell`s. Text form is three rows of
//! `X`, `O` and `.`, which is what `Display` writes and `FromStr` reads:
//!
//! ```
//! use three_mens_morris::core::{Board, Player, Position};
//!
//! let board: Board = "X../.O./...".parse().unwrap();
//! assert_eq!(board[Position::new(0, 0)], Some(Player::X));
//! assert_eq!(board[Position::new(1, 1)], Some(Player::O));
//! assert_eq!(board.count(Player::X), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::str::FromStr;

use super::config::BOARD_SIZE;
use super::player::Player;
use crate::error::SetupError;

/// Contents of one intersection.
pub type Cell = Option<Player>;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A (row, col) coordinate with both parts in `0..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of `Position`.
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = SetupError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_new(raw.row, raw.col).ok_or(SetupError::PositionOutOfRange {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Position {
    /// The center intersection, adjacent to every other cell.
    pub const CENTER: Position = Position::new(1, 1);

    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "Position out of range"
        );
        Self { row, col }
    }

    /// Create a position, or `None` if it lies off the board.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..9`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of `index`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    /// All nine positions, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 3x3 grid of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Write a cell. Crate-internal so that only engine operations change
    /// the authoritative board.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// A copy with `from` cleared and `to` holding `player`.
    #[must_use]
    pub(crate) fn with_move(&self, from: Position, to: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(from, None);
        next.set(to, Some(player));
        next
    }

    /// A copy with `pos` holding `player`.
    #[must_use]
    pub(crate) fn with_placement(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Some(player));
        next
    }

    /// Number of cells holding `player`'s mark.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Positions holding `player`'s mark, row-major.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.get(p) == Some(player))
    }

    /// Empty positions, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_empty_at(p))
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % BOARD_SIZE == 0 {
                writeln!(f)?;
            }
            let c = cell.map_or('.', Player::mark);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = SetupError;

    /// Parse three rows of `X`/`O`/`.`, separated by `/` or newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut index = 0;

        for c in s.chars() {
            if c == '/' || c.is_whitespace() {
                continue;
            }
            if index >= CELL_COUNT {
                return Err(SetupError::BoardLength {
                    expected: CELL_COUNT,
                    got: index + 1,
                });
            }
            let cell = match c {
                '.' | '-' | '_' => None,
                other => Some(Player::from_mark(other).ok_or(SetupError::BoardCharacter {
                    character: other,
                    index,
                })?),
            };
            board.cells[index] = cell;
            index += 1;
        }

        if index != CELL_COUNT {
            return Err(SetupError::BoardLength {
                expected: CELL_COUNT,
                got: index,
            });
        }

        Ok(board)
    }
}

//! Winning lines and win detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Position};

/// Three cells that win the game when held by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    #[must_use]
    pub const fn cells(self) -> [Position; 3] {
        self.0
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// True if every cell holds `player`'s mark.
    #[must_use]
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.0.iter().all(|&pos| board[pos] == Some(player))
    }
}

const fn line(cells: [(u8, u8); 3]) -> WinLine {
    WinLine([
        Position::new(cells[0].0, cells[0].1),
        Position::new(cells[1].0, cells[1].1),
        Position::new(cells[2].0, cells[2].1),
    ])
}

/// All winning lines: rows, then columns, then the two diagonals.
///
/// The order decides which line `check_win` reports when several are
/// complete at once.
pub const WIN_LINES: [WinLine; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

/// First line in `WIN_LINES` order held entirely by `player`.
///
/// ```
/// use three_mens_morris::core::{Board, Player, Position};
/// use three_mens_morris::rules::check_win;
///
/// let board: Board = "..X/.X./X..".parse().unwrap();
/// let line = check_win(&board, Player::X).unwrap();
/// assert!(line.contains(Position::CENTER));
/// assert!(check_win(&board, Player::O).is_none());
/// ```
#[must_use]
pub fn check_win(board: &Board, player: Player) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .find(|line| line.is_held_by(board, player))
        .copied()
}

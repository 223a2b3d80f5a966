//! Error types for the rules engine and fixture construction.

use thiserror::Error;

/// Why the engine refused an action.
///
/// Every variant is recoverable: the rejected action had no effect and the
/// caller's `GameState` is exactly as it was.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleViolation {
    #[error("action not allowed in the current phase")]
    WrongPhase,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("target cell is already occupied")]
    CellOccupied,

    #[error("player has no pieces left to place")]
    NoPiecesLeft,

    #[error("target cell is not adjacent to the moving piece")]
    NotAdjacent,

    #[error("source cell does not hold the player's piece")]
    NotYourPiece,
}

/// Errors building a board or state from explicit contents.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("board text has wrong length: expected {expected} cells, got {got}")]
    BoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {index} (expected 'X', 'O' or '.')")]
    BoardCharacter { character: char, index: usize },

    #[error("position ({row},{col}) is off the board")]
    PositionOutOfRange { row: u8, col: u8 },

    #[error("too many pieces for {player}: {count} on board, at most {max} allowed")]
    TooManyPieces {
        player: crate::core::Player,
        count: usize,
        max: u8,
    },
}

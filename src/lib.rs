//! # three-mens-morris
//!
//! Rules engine and heuristic opponent for a two-phase tic-tac-toe variant
//! played on a 3x3 morris board.
//!
//! ## Rules
//!
//! 1. **Placement**: X and O alternate dropping pieces on empty cells until
//!    each has placed three.
//! 2. **Movement**: players alternate sliding one piece along a board line
//!    to an adjacent empty cell. The center connects to every cell; other
//!    cells connect only to their in-line neighbours and the center.
//! 3. Three in a row (row, column or diagonal) wins immediately, in either
//!    phase.
//!
//! ## Architecture
//!
//! - **Value states**: every engine operation maps `&GameState` to a new
//!   `GameState` or a `RuleViolation`. Nothing is mutated in place.
//!
//! - **Static tables**: adjacency and winning lines are `const` data.
//!
//! - **Injectable randomness**: the computer opponent takes a seeded
//!   `GameRng`, so games against it are reproducible.
//!
//! ## Modules
//!
//! - `core`: players, board, positions, actions, state, RNG, configuration
//! - `rules`: adjacency, win detection, state transitions
//! - `ai`: fixed-priority heuristic opponent
//! - `session`: driver that resolves clicks and runs the computer's turn
//!
//! ## Example
//!
//! ```
//! use three_mens_morris::{apply_placement, check_win, reset, GamePhase, Player, Position};
//!
//! let mut state = reset();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     state = apply_placement(&state, state.turn(), Position::new(row, col))?;
//! }
//!
//! assert_eq!(state.phase(), GamePhase::GameOver);
//! assert_eq!(state.winner(), Some(Player::X));
//! assert!(check_win(state.board(), Player::X).is_some());
//! # Ok::<(), three_mens_morris::RuleViolation>(())
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Cell, GameMode, GamePhase, GameRng, GameState, Player, PlayerInventory,
    PlayerMap, Position, SessionConfig, Victory,
};

pub use crate::error::{RuleViolation, SetupError};

pub use crate::rules::{
    apply_action, apply_move, apply_placement, check_win, clear_selection, is_adjacent,
    legal_actions, neighbours, reset, select_piece, WinLine, WIN_LINES,
};

pub use crate::ai::select_action;

pub use crate::session::{CellHint, ClickOutcome, Session, Status};

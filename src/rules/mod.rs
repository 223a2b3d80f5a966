//! Rules engine for the placement/movement game.
//!
//! - `adjacency`: which cells a piece may slide between
//! - `lines`: the eight winning lines and win detection
//! - `engine`: pure state transitions (placement, selection, movement, reset)
//!
//! The engine performs no I/O and holds no state of its own; callers own the
//! `GameState` and replace it with whatever an operation returns.

pub mod adjacency;
pub mod engine;
pub mod lines;

pub use adjacency::{is_adjacent, neighbours};
pub use engine::{
    apply_action, apply_move, apply_placement, clear_selection, legal_actions, reset,
    select_piece, slides,
};
pub use lines::{check_win, WinLine, WIN_LINES};

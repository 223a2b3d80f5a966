//! Core value types: players, board geometry, actions, state, RNG, configuration.
//!
//! Everything here is plain data. The rules that move a `GameState` forward
//! live in `crate::rules`.

pub mod player;
pub mod board;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap};
pub use board::{Board, Cell, Position};
pub use rng::GameRng;
pub use config::{GameMode, SessionConfig, BOARD_SIZE, DEFAULT_COMPUTER_DELAY_MS, PIECES_PER_PLAYER};
pub use action::Action;
pub use state::{GamePhase, GameState, PlayerInventory, Victory};

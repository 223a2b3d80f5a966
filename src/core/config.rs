//! Game constants and session configuration.
//!
//! The board and piece allotment are fixed by the rules. What a driver can
//! choose is captured in `SessionConfig`:
//! - `mode`: two humans, or a human against the computer
//! - `computer`: which side the computer plays in single-player
//! - `computer_delay_ms`: pacing pause before the computer moves
//! - `seed`: RNG seed for the computer's tie-breaking (`None` = entropy)

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::player::Player;

/// Board side length.
pub const BOARD_SIZE: usize = 3;

/// Pieces each player brings into the game.
pub const PIECES_PER_PLAYER: u8 = 3;

/// Pause before the computer plays, in milliseconds.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 700;

/// Who controls the two sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// A human against the heuristic computer opponent.
    #[default]
    SinglePlayer,
    /// Two humans sharing the board.
    TwoPlayers,
}

/// Configuration for a play session.
///
/// ```
/// use three_mens_morris::core::{GameMode, Player, SessionConfig};
///
/// let config = SessionConfig::default()
///     .with_computer(Player::X)
///     .with_seed(42);
///
/// assert_eq!(config.mode, GameMode::SinglePlayer);
/// assert_eq!(config.human(), Player::O);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Game mode.
    pub mode: GameMode,

    /// Side played by the computer in single-player mode.
    pub computer: Player,

    /// Pacing delay before the computer's action, in milliseconds.
    pub computer_delay_ms: u64,

    /// Seed for the computer's random tie-breaking.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            computer: Player::O,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Configuration for the given mode with default settings.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    #[must_use]
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The side played by the human in single-player mode.
    #[must_use]
    pub fn human(&self) -> Player {
        self.computer.other()
    }

    /// The computer's pacing delay.
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// True if `player` is driven by the computer under this configuration.
    #[must_use]
    pub fn is_computer(&self, player: Player) -> bool {
        self.mode == GameMode::SinglePlayer && player == self.computer
    }
}

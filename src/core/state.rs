//! Game state: board, phase, turn, inventories, selection and outcome.
//!
//! ## GameState
//!
//! One cohesive value holding everything the rules need. Fields are read
//! through accessors; the only way to change a state is an engine
//! operation in `crate::rules`, which returns a whole new value or an
//! error. A driver therefore never observes a board that was updated
//! without the turn being switched.
//!
//! ## Lifecycle
//!
//! - `GameState::new()`: empty board, Placement, X to move, 3 pieces each
//! - Placement -> Movement once both players have placed all pieces
//! - Any phase -> GameOver as soon as a line is completed
//! - `rules::reset()` starts over

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Position};
use super::config::PIECES_PER_PLAYER;
use super::player::{Player, PlayerMap};
use crate::error::SetupError;
use crate::rules::{check_win, WinLine};

/// Stage of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players take turns dropping pieces onto empty cells.
    #[default]
    Placement,
    /// Players take turns sliding pieces along adjacency edges.
    Movement,
    /// A line was completed; only a reset is accepted.
    GameOver,
}

/// One player's pieces: still in hand, and on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerInventory {
    to_place: u8,

    /// Board positions in placement order. A move removes the source and
    /// appends the target; the selector's tie-breaking follows this order.
    on_board: SmallVec<[Position; 3]>,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self {
            to_place: PIECES_PER_PLAYER,
            on_board: SmallVec::new(),
        }
    }
}

impl PlayerInventory {
    /// Pieces not yet placed.
    #[must_use]
    pub fn to_place(&self) -> u8 {
        self.to_place
    }

    /// Positions currently occupied by this player.
    #[must_use]
    pub fn on_board(&self) -> &[Position] {
        &self.on_board
    }

    pub(crate) fn place(&mut self, pos: Position) {
        debug_assert!(self.to_place > 0, "place with empty hand");
        self.to_place = self.to_place.saturating_sub(1);
        self.on_board.push(pos);
    }

    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        self.on_board.retain(|p| *p != from);
        self.on_board.push(to);
    }
}

/// A finished game: who won and with which line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub winner: Player,
    pub line: WinLine,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) phase: GamePhase,
    pub(crate) turn: Player,
    pub(crate) inventories: PlayerMap<PlayerInventory>,
    pub(crate) selected: Option<Position>,
    pub(crate) outcome: Option<Victory>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The initial state of every game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            phase: GamePhase::Placement,
            turn: Player::X,
            inventories: PlayerMap::with_value(PlayerInventory::default()),
            selected: None,
            outcome: None,
        }
    }

    /// Build a state around an explicit board, with `turn` to move.
    ///
    /// Inventories are derived from the board (pieces row-major, the rest
    /// still in hand). The phase is GameOver if a line is already complete,
    /// Movement if both players have all pieces down, Placement otherwise.
    ///
    /// ```
    /// use three_mens_morris::core::{GamePhase, GameState, Player};
    ///
    /// let state = GameState::from_board("XOX/O.O/X..".parse()?, Player::X)?;
    /// assert_eq!(state.phase(), GamePhase::Movement);
    /// assert_eq!(state.inventory(Player::O).to_place(), 0);
    /// # Ok::<(), three_mens_morris::SetupError>(())
    /// ```
    pub fn from_board(board: Board, turn: Player) -> Result<Self, SetupError> {
        for player in Player::ALL {
            let count = board.count(player);
            if count > PIECES_PER_PLAYER as usize {
                return Err(SetupError::TooManyPieces {
                    player,
                    count,
                    max: PIECES_PER_PLAYER,
                });
            }
        }

        let inventories = PlayerMap::new(|player| PlayerInventory {
            to_place: PIECES_PER_PLAYER - board.count(player) as u8,
            on_board: board.positions_of(player).collect(),
        });

        let outcome = Player::ALL.into_iter().find_map(|player| {
            check_win(&board, player).map(|line| Victory { winner: player, line })
        });

        let phase = if outcome.is_some() {
            GamePhase::GameOver
        } else if inventories.all(|inv| inv.to_place == 0) {
            GamePhase::Movement
        } else {
            GamePhase::Placement
        };

        Ok(Self {
            board,
            phase,
            turn,
            inventories,
            selected: None,
            outcome,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player to move. Frozen on the winner once the game is over.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub fn inventory(&self, player: Player) -> &PlayerInventory {
        &self.inventories[player]
    }

    /// Piece chosen for relocation, only ever set during Movement.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Victory> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.outcome.map(|v| v.winner)
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<WinLine> {
        self.outcome.map(|v| v.line)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

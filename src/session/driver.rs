//! The authoritative game held by a front end.
//!
//! A `Session` owns the `GameState`, the configuration and the computer's
//! random source. Front ends forward cell clicks and, when
//! `is_computer_turn()` says so, wait `computer_delay()` and call
//! `play_computer_turn()`. All rule checking happens in `crate::rules`.

use std::time::Duration;

use tracing::{info, instrument, warn};

use super::status::{CellHint, Status};
use crate::ai::select_action;
use crate::core::{Action, GameMode, GamePhase, GameRng, GameState, Position, SessionConfig};
use crate::error::RuleViolation;
use crate::rules::{
    apply_action, apply_move, apply_placement, clear_selection, is_adjacent, reset, select_piece,
};

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was placed.
    Placed,
    /// The selected piece slid to the clicked cell.
    Moved,
    /// The clicked piece is now selected.
    Selected,
    /// The selection was dropped.
    Deselected,
    /// Nothing happened (game over, computer's turn, or a dead cell).
    Ignored,
}

/// One game in progress plus the settings it is played under.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    state: GameState,
    rng: GameRng,
}

impl Session {
    /// Start a fresh game.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(mode = ?config.mode, seed = rng.seed(), "session started");
        Self {
            config,
            state: reset(),
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Pause a front end should take before `play_computer_turn`.
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        self.config.computer_delay()
    }

    /// True if the computer is to move in a live game.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        !self.state.is_over() && self.config.is_computer(self.state.turn())
    }

    /// Start over under the same settings.
    pub fn reset(&mut self) {
        info!("game reset");
        self.state = reset();
    }

    /// Switch game mode; always starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(?mode, "game mode changed");
        self.config.mode = mode;
        self.state = reset();
    }

    /// Resolve a click on `pos` for the player to move.
    ///
    /// During movement with a piece selected, an adjacent empty cell moves
    /// it, another own piece takes over the selection, and anything else
    /// drops the selection. Rule violations are returned and leave the game
    /// unchanged.
    #[instrument(level = "debug", skip(self), fields(phase = ?self.state.phase()))]
    pub fn click(&mut self, pos: Position) -> Result<ClickOutcome, RuleViolation> {
        if self.state.is_over() || self.is_computer_turn() {
            return Ok(ClickOutcome::Ignored);
        }

        let player = self.state.turn();
        let owns_cell = self.state.board()[pos] == Some(player);

        let (next, outcome) = match (self.state.phase(), self.state.selected()) {
            (GamePhase::Placement, _) => (
                apply_placement(&self.state, player, pos)?,
                ClickOutcome::Placed,
            ),
            (GamePhase::Movement, Some(from))
                if self.state.board().is_empty_at(pos) && is_adjacent(from, pos) =>
            {
                (
                    apply_move(&self.state, player, from, pos)?,
                    ClickOutcome::Moved,
                )
            }
            (GamePhase::Movement, _) if owns_cell => (
                select_piece(&self.state, player, pos)?,
                ClickOutcome::Selected,
            ),
            (GamePhase::Movement, Some(_)) => {
                (clear_selection(&self.state), ClickOutcome::Deselected)
            }
            (GamePhase::Movement, None) | (GamePhase::GameOver, _) => {
                return Ok(ClickOutcome::Ignored)
            }
        };

        self.state = next;
        Ok(outcome)
    }

    /// Let the computer take its turn, if it is to move.
    ///
    /// Returns the action played, or `None` when it is not the computer's
    /// turn or it has no move.
    pub fn play_computer_turn(&mut self) -> Option<Action> {
        if !self.is_computer_turn() {
            return None;
        }

        let computer = self.config.computer;
        let action = select_action(&self.state, computer, self.config.human(), &mut self.rng)?;
        match apply_action(&self.state, computer, action) {
            Ok(next) => {
                info!(player = %computer, %action, "computer played");
                self.state = next;
                Some(action)
            }
            Err(violation) => {
                warn!(%action, %violation, "computer proposed a rejected action");
                None
            }
        }
    }

    /// Prompt for the current position.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::of(&self.state)
    }

    /// Highlight flags for `pos`.
    #[must_use]
    pub fn cell_hint(&self, pos: Position) -> CellHint {
        CellHint::of(&self.state, pos, !self.is_computer_turn())
    }
}

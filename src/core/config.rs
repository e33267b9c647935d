//! Session configuration.
//!
//! Drivers describe a session through `SessionConfig`, either in code via the
//! `with_*` builders or deserialized from JSON. Missing fields fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};

use super::error::SessionError;

/// Largest board `validate` accepts.
pub const MAX_BOARD_SIZE: usize = 10_000;

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Display name of the session.
    pub name: String,

    /// Number of seats (1-255).
    pub player_count: usize,

    /// Cash each player starts with.
    pub starting_cash: i64,

    /// Number of spaces on the board loop.
    pub board_size: usize,

    /// Dice rolled per turn.
    pub dice_count: u8,

    /// Faces per die.
    pub dice_sides: u32,

    /// Cash paid to a player landing on the start space.
    pub start_bonus: i64,

    /// Random seed for all dice.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Reject turns taken before `init` has placed the players.
    pub require_init: bool,

    /// Keep only the most recent reports in the turn history.
    /// `None` keeps every turn.
    pub history_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: "Monopoly".to_string(),
            player_count: 4,
            starting_cash: 1500,
            board_size: 40,
            dice_count: 2,
            dice_sides: 6,
            start_bonus: 200,
            seed: 42,
            require_init: true,
            history_limit: None,
        }
    }
}

impl SessionConfig {
    /// Set the session name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the number of players.
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the starting cash.
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the dice layout.
    pub fn with_dice(mut self, count: u8, sides: u32) -> Self {
        self.dice_count = count;
        self.dice_sides = sides;
        self
    }

    /// Set the start-space bonus.
    pub fn with_start_bonus(mut self, bonus: i64) -> Self {
        self.start_bonus = bonus;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Toggle the `init`-before-play requirement.
    pub fn with_require_init(mut self, require: bool) -> Self {
        self.require_init = require;
        self
    }

    /// Cap the number of turn reports kept in history.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Check that a session can be built from this config.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.player_count == 0 {
            return Err(SessionError::config("player_count must be at least 1"));
        }
        if self.player_count > 255 {
            return Err(SessionError::config("player_count must be at most 255"));
        }
        if self.board_size == 0 {
            return Err(SessionError::config("board_size must be at least 1"));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(SessionError::config(format!("board_size must be at most {MAX_BOARD_SIZE}")));
        }
        if self.dice_count == 0 {
            return Err(SessionError::config("dice_count must be at least 1"));
        }
        if self.dice_sides == 0 {
            return Err(SessionError::config("dice_sides must be at least 1"));
        }
        if u64::from(self.dice_count) * u64::from(self.dice_sides) > u64::from(u32::MAX) {
            return Err(SessionError::config("dice_count * dice_sides must fit in u32"));
        }
        Ok(())
    }
}

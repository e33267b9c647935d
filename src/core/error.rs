//! Session error type.
//!
//! Every fallible operation in the crate returns `Result<_, SessionError>`.
//! A failed turn leaves the session exactly as it was before the call.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised while configuring or playing a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session (or its config) cannot be played as given.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A dice roll produced a total the movement rules cannot use.
    #[error("{player} rolled an invalid total of {total}")]
    InvalidRoll { player: PlayerId, total: u32 },

    /// The die faces add up to more than a `u32` can hold.
    #[error("{player} rolled faces whose total does not fit in u32")]
    RollOverflow { player: PlayerId },

    /// The turn counter cannot advance any further.
    #[error("turn limit of {0} reached")]
    TurnLimitReached(u32),

    /// A turn was requested before `init` placed the players.
    #[error("session has not been initialized")]
    NotInitialized,

    /// A turn was requested after `end`.
    #[error("session has already ended")]
    SessionEnded,
}

impl SessionError {
    /// Shorthand for `InvalidConfiguration`.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

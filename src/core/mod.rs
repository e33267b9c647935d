//! Core types: players, dice, RNG, configuration and errors.
//!
//! Nothing in here knows about boards or turn order; the session modules
//! build on these pieces.

pub mod player;
pub mod dice;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, Token};
pub use dice::{Dice, Roll};
pub use rng::{GameRng, GameRngState};
pub use config::{SessionConfig, MAX_BOARD_SIZE};
pub use error::SessionError;

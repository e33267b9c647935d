//! # rust-monopoly
//!
//! A turn-based board-loop engine in the style of Monopoly.
//!
//! ## Design Principles
//!
//! 1. **Borrowed State**: Sessions borrow the driver's players and board as
//!    slices. The driver keeps ownership; the roster and board cannot be
//!    resized while a session is alive.
//!
//! 2. **Composition Over Inheritance**: The lifecycle (`init`, `end`,
//!    roster access) is the `GameSession` trait. Games embed `SessionCore`
//!    and add their own turn logic.
//!
//! 3. **Explicit Errors**: Empty rosters or boards, zero rolls and turns
//!    outside the running phase are `SessionError`s, never panics.
//!
//! 4. **Deterministic Dice**: Every seat rolls from a forked ChaCha8 stream,
//!    so a seed fully determines a game.
//!
//! ## Modules
//!
//! - `core`: Player ids and contract, dice, RNG, configuration, errors
//! - `board`: The `Grid` landing-effect contract and stock spaces
//! - `rules`: The `GameSession` lifecycle and shared `SessionCore`
//! - `games`: Game implementations (`monopoly`)

pub mod core;
pub mod board;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, Token,
    Dice, Roll,
    GameRng, GameRngState,
    SessionConfig, SessionError,
};

pub use crate::board::{Grid, Space, SpaceKind};

pub use crate::rules::{GameSession, SessionCore, SessionPhase, SessionSummary, Standing};

pub use crate::games::monopoly::{
    MonopolySession, TurnReport,
    SessionBuilder, Table,
    play, play_until,
};

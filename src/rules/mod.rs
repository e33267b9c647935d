//! Session lifecycle contract.
//!
//! Games implement `GameSession` to expose:
//! - Player placement at the start of play (`init`)
//! - Termination and final standings (`end`)
//! - Read access to the roster
//!
//! The shared fields live in `SessionCore`, which games embed.

pub mod session;

pub use session::{GameSession, SessionCore, SessionPhase, SessionSummary, Standing};

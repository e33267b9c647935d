//! Monopoly-style board loop.
//!
//! Players roll, move around a closed loop of spaces and trigger each
//! space's effect, in strict seat order:
//! - `MonopolySession`: the turn loop over a borrowed roster and board
//! - `SessionBuilder` / `Table`: build tokens and a standard board from config
//! - `play` / `play_until`: drive a session from `init` to `end`

mod builder;
mod driver;
mod session;

pub use builder::{standard_board, SessionBuilder, Table, DIVIDEND_AMOUNT, TAX_AMOUNT};
pub use driver::{play, play_until};
pub use session::{advance_position, MonopolySession, TurnReport};

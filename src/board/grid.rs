//! The board-space contract.

use crate::core::Player;

/// A space on the board loop.
///
/// The session calls `effect` when a player lands here. The effect may change
/// any of the player's state (and the space's own state) and returns a
/// human-readable description of what happened.
pub trait Grid<P: Player + ?Sized> {
    /// Display name of the space.
    fn name(&self) -> &str;

    /// Apply the landing effect to `player`.
    fn effect(&mut self, player: &mut P) -> String;
}

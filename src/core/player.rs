//! Player identification and the player contract.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players.
//!
//! ## Player
//!
//! What the turn loop needs from a player: a board position, a dice roll and
//! a cash balance for end-of-game standings. `Token` is the stock
//! implementation; drivers can supply their own.

use serde::{Deserialize, Serialize};

use super::dice::{Dice, Roll};
use super::error::SessionError;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_monopoly::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in a session.
///
/// The session owns none of this state; it reads and writes it through the
/// trait during `init` and `advance_turn`.
pub trait Player {
    /// Seat identifier.
    fn id(&self) -> PlayerId;

    /// Display name used in reports.
    fn name(&self) -> &str;

    /// Current board index.
    fn position(&self) -> usize;

    /// Move the player to a board index.
    fn set_position(&mut self, position: usize);

    /// Roll this player's dice.
    ///
    /// Implementations build the result through `Roll`, which rejects a zero
    /// total with `InvalidRoll`.
    fn roll_dice(&mut self) -> Result<Roll, SessionError>;

    /// Cash on hand.
    fn cash(&self) -> i64;

    /// Add (or, with a negative amount, remove) cash.
    ///
    /// Implementations should saturate rather than overflow.
    fn adjust_cash(&mut self, amount: i64);
}

/// Stock player: a named token with a cash balance and its own dice.
#[derive(Clone, Debug)]
pub struct Token {
    id: PlayerId,
    name: String,
    position: usize,
    cash: i64,
    dice: Dice,
}

impl Token {
    /// Create a token at position 0.
    pub fn new(id: PlayerId, name: impl Into<String>, cash: i64, dice: Dice) -> Self {
        Self {
            id,
            name: name.into(),
            position: 0,
            cash,
            dice,
        }
    }

    /// The token's dice.
    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }
}

impl Player for Token {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    fn roll_dice(&mut self) -> Result<Roll, SessionError> {
        self.dice.roll(self.id)
    }

    fn cash(&self) -> i64 {
        self.cash
    }

    fn adjust_cash(&mut self, amount: i64) {
        self.cash = self.cash.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
        assert!(p0 < p1);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_player_id_serialization() {
        let id = PlayerId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_token_state() {
        let mut token = Token::new(PlayerId::new(1), "Boot", 1500, Dice::classic(GameRng::new(3)));

        assert_eq!(token.id(), PlayerId::new(1));
        assert_eq!(token.name(), "Boot");
        assert_eq!(token.position(), 0);
        assert_eq!(token.cash(), 1500);

        token.set_position(9);
        token.adjust_cash(-200);
        token.adjust_cash(50);

        assert_eq!(token.position(), 9);
        assert_eq!(token.cash(), 1350);
    }

    #[test]
    fn test_token_cash_saturates() {
        let mut rich = Token::new(PlayerId::new(0), "Iron", i64::MAX - 10, Dice::classic(GameRng::new(1)));
        rich.adjust_cash(50);
        assert_eq!(rich.cash(), i64::MAX);

        let mut broke = Token::new(PlayerId::new(1), "Ship", i64::MIN + 10, Dice::classic(GameRng::new(2)));
        broke.adjust_cash(-100);
        assert_eq!(broke.cash(), i64::MIN);
    }

    #[test]
    fn test_token_rolls_positive() {
        let mut token = Token::new(PlayerId::new(0), "Hat", 0, Dice::classic(GameRng::new(11)));

        for _ in 0..50 {
            let roll = token.roll_dice().unwrap();
            assert!(roll.total() >= 2 && roll.total() <= 12);
        }
    }
}

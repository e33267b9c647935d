//! Stock board spaces.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::core::Player;

/// What a space does to the player who lands on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    /// The start of the loop; pays `bonus` on landing.
    Start { bonus: i64 },
    /// Nothing happens.
    Plain,
    /// Flat cash change: positive pays the player, negative charges them.
    Cash { amount: i64 },
}

/// A named space with a landing effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    name: String,
    kind: SpaceKind,
    landings: u32,
}

impl Space {
    /// Create a space.
    pub fn new(name: impl Into<String>, kind: SpaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            landings: 0,
        }
    }

    /// Start space paying `bonus`.
    pub fn start(bonus: i64) -> Self {
        Self::new("Go", SpaceKind::Start { bonus })
    }

    /// Space with no effect.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, SpaceKind::Plain)
    }

    /// Space that adjusts cash by `amount`.
    pub fn cash(name: impl Into<String>, amount: i64) -> Self {
        Self::new(name, SpaceKind::Cash { amount })
    }

    #[must_use]
    pub fn kind(&self) -> &SpaceKind {
        &self.kind
    }

    /// How many times a player has landed here.
    #[must_use]
    pub fn landings(&self) -> u32 {
        self.landings
    }
}

impl<P: Player + ?Sized> Grid<P> for Space {
    fn name(&self) -> &str {
        &self.name
    }

    fn effect(&mut self, player: &mut P) -> String {
        self.landings = self.landings.saturating_add(1);

        match self.kind {
            SpaceKind::Start { bonus } => {
                player.adjust_cash(bonus);
                format!("{} landed on {} and collected {}", player.name(), self.name, bonus)
            }
            SpaceKind::Plain => {
                format!("{} landed on {}", player.name(), self.name)
            }
            SpaceKind::Cash { amount } if amount >= 0 => {
                player.adjust_cash(amount);
                format!("{} landed on {} and received {}", player.name(), self.name, amount)
            }
            SpaceKind::Cash { amount } => {
                player.adjust_cash(amount);
                format!("{} landed on {} and paid {}", player.name(), self.name, amount.unsigned_abs())
            }
        }
    }
}

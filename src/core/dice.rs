//! Dice and roll results.
//!
//! A `Roll` is the only way a movement amount enters a turn. Its constructors
//! reject a zero total, so the turn loop can assume every move advances the
//! token by at least one space.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::error::SessionError;
use super::player::PlayerId;
use super::rng::GameRng;

/// Outcome of rolling a player's dice.
///
/// SmallVec keeps the usual one or two faces inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    faces: SmallVec<[u32; 2]>,
    total: u32,
}

impl Roll {
    /// Build a roll from individual die faces.
    ///
    /// Fails with `InvalidRoll` when the faces sum to zero (including an
    /// empty face list) and with `RollOverflow` when the sum exceeds `u32`.
    pub fn from_faces(player: PlayerId, faces: &[u32]) -> Result<Self, SessionError> {
        let total = faces
            .iter()
            .try_fold(0u32, |acc, &face| acc.checked_add(face))
            .ok_or(SessionError::RollOverflow { player })?;
        if total == 0 {
            return Err(SessionError::InvalidRoll { player, total });
        }
        Ok(Self {
            faces: SmallVec::from_slice(faces),
            total,
        })
    }

    /// Build a single-face roll with the given total.
    pub fn single(player: PlayerId, total: u32) -> Result<Self, SessionError> {
        Self::from_faces(player, &[total])
    }

    /// Individual die faces.
    #[must_use]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Sum of all faces. Always positive.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// True when two or more dice show the same face.
    #[must_use]
    pub fn is_doubles(&self) -> bool {
        self.faces.len() > 1 && self.faces.iter().all(|&f| f == self.faces[0])
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.faces.len() == 1 {
            return write!(f, "{}", self.faces[0]);
        }
        let faces: Vec<String> = self.faces.iter().map(u32::to_string).collect();
        write!(f, "{} ({})", self.total(), faces.join("+"))
    }
}

/// A set of identical dice with its own RNG stream.
#[derive(Clone, Debug)]
pub struct Dice {
    count: u8,
    sides: u32,
    rng: GameRng,
}

impl Dice {
    /// Create `count` dice with `sides` faces each.
    ///
    /// The largest possible total, `count * sides`, must fit in a `u32`.
    pub fn new(count: u8, sides: u32, rng: GameRng) -> Result<Self, SessionError> {
        if count == 0 {
            return Err(SessionError::config("dice count must be at least 1"));
        }
        if sides == 0 {
            return Err(SessionError::config("dice must have at least 1 side"));
        }
        if sides.checked_mul(u32::from(count)).is_none() {
            return Err(SessionError::config("dice total could exceed u32"));
        }
        Ok(Self { count, sides, rng })
    }

    /// Two six-sided dice, the classic board-game setup.
    pub fn classic(rng: GameRng) -> Self {
        Self { count: 2, sides: 6, rng }
    }

    /// Number of dice.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Faces per die.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll all dice on behalf of `player`.
    pub fn roll(&mut self, player: PlayerId) -> Result<Roll, SessionError> {
        let faces: SmallVec<[u32; 2]> = (0..self.count).map(|_| self.rng.roll_die(self.sides)).collect();
        debug!(%player, ?faces, "dice rolled");
        Roll::from_faces(player, &faces)
    }
}

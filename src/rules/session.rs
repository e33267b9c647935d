//! Session lifecycle shared by every game.
//!
//! `GameSession` is the capability set a driver relies on: `init`, `end` and
//! read access to the players. Games embed a `SessionCore` for the shared
//! fields and delegate to it, instead of extending a base type.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Player, PlayerId, SessionError};

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Constructed, `init` not yet called.
    #[default]
    Created,
    /// `init` has run; turns may be played.
    Running,
    /// `end` has run.
    Ended,
}

/// One row of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub cash: i64,
}

/// Result reported by `end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub game_name: String,
    pub turns_played: u32,
    /// Players ordered by cash, richest first. Ties keep seat order.
    pub standings: Vec<Standing>,
}

impl SessionSummary {
    /// The richest player, if there are any players.
    #[must_use]
    pub fn richest(&self) -> Option<PlayerId> {
        self.standings.first().map(|s| s.player)
    }
}

/// Lifecycle operations every session supports.
pub trait GameSession {
    type Player: Player;

    /// Session name.
    fn name(&self) -> &str;

    /// Place every player on position 0.
    ///
    /// Safe to call more than once; each call resets all positions.
    fn init(&mut self);

    /// Finish the session and report standings.
    fn end(&mut self) -> SessionSummary;

    /// Players in turn order.
    fn players(&self) -> &[Self::Player];

    /// Current lifecycle phase.
    fn phase(&self) -> SessionPhase;
}

/// Fields shared by every session: its name, the borrowed roster and the
/// lifecycle phase.
///
/// The roster is borrowed from the driver. Because it is a slice, the driver
/// cannot add or remove players while the session is alive.
#[derive(Debug)]
pub struct SessionCore<'a, P> {
    game_name: String,
    players: &'a mut [P],
    phase: SessionPhase,
}

impl<'a, P: Player> SessionCore<'a, P> {
    /// Create the shared session state.
    ///
    /// Fails with `InvalidConfiguration` when `players` is empty.
    pub fn new(game_name: impl Into<String>, players: &'a mut [P]) -> Result<Self, SessionError> {
        if players.is_empty() {
            return Err(SessionError::config("a session needs at least one player"));
        }
        Ok(Self {
            game_name: game_name.into(),
            players,
            phase: SessionPhase::Created,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.game_name
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &[P] {
        &*self.players
    }

    /// Mutable access to player state. The roster length stays fixed.
    pub fn players_mut(&mut self) -> &mut [P] {
        &mut *self.players
    }

    /// Reset every player to position 0 and mark the session running.
    pub fn init(&mut self) {
        info!(game = %self.game_name, players = self.players.len(), "initializing game");
        for player in self.players.iter_mut() {
            player.set_position(0);
        }
        self.phase = SessionPhase::Running;
    }

    /// Mark the session ended and build its summary.
    pub fn end(&mut self, turns_played: u32) -> SessionSummary {
        self.phase = SessionPhase::Ended;
        let summary = self.summarize(turns_played);
        info!(
            game = %self.game_name,
            turns = turns_played,
            richest = ?summary.richest(),
            "game over"
        );
        summary
    }

    /// Current standings without ending the session.
    #[must_use]
    pub fn summarize(&self, turns_played: u32) -> SessionSummary {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|p| Standing {
                player: p.id(),
                name: p.name().to_string(),
                cash: p.cash(),
            })
            .collect();
        // Stable sort keeps seat order among equal balances
        standings.sort_by(|a, b| b.cash.cmp(&a.cash));

        SessionSummary {
            game_name: self.game_name.clone(),
            turns_played,
            standings,
        }
    }
}

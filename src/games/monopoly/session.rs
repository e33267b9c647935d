//! Monopoly session: the turn loop.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Grid;
use crate::core::{Player, PlayerId, Roll, SessionError};
use crate::rules::{GameSession, SessionCore, SessionPhase, SessionSummary};

/// Everything that happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn number (starts at 1).
    pub turn: u32,
    pub player: PlayerId,
    pub roll: Roll,
    pub from: usize,
    pub to: usize,
    /// The move went past the last space and continued from the start.
    pub wrapped: bool,
    /// Name of the space landed on.
    pub space: String,
    /// Description returned by the space's effect.
    pub description: String,
}

/// A Monopoly-style session over a borrowed roster and board.
///
/// Players take turns in seat order, forever, until the driver calls `end`.
/// Both collections are borrowed as slices, so neither can be resized while
/// the session exists.
///
/// ## Example
///
/// ```
/// use rust_monopoly::board::Space;
/// use rust_monopoly::core::{Dice, GameRng, PlayerId, Token};
/// use rust_monopoly::games::monopoly::MonopolySession;
/// use rust_monopoly::rules::GameSession;
///
/// let mut players = vec![
///     Token::new(PlayerId::new(0), "Dog", 1500, Dice::classic(GameRng::new(1))),
///     Token::new(PlayerId::new(1), "Hat", 1500, Dice::classic(GameRng::new(2))),
/// ];
/// let mut board: Vec<Space> = (0..10).map(|i| Space::plain(format!("Street {i}"))).collect();
///
/// let mut session = MonopolySession::new("Demo", &mut players, &mut board).unwrap();
/// session.init();
///
/// let report = session.advance_turn().unwrap();
/// assert_eq!(report.player, PlayerId::new(0));
/// assert_eq!(session.current_player_index(), 1);
/// ```
pub struct MonopolySession<'a, P, G> {
    core: SessionCore<'a, P>,
    grids: &'a mut [G],
    current_player_index: usize,
    turns_played: u32,
    require_init: bool,
    history: Vector<TurnReport>,
    history_limit: Option<usize>,
}

impl<'a, P, G> MonopolySession<'a, P, G>
where
    P: Player,
    G: Grid<P>,
{
    /// Create a session. `init` must run before the first turn.
    ///
    /// Fails with `InvalidConfiguration` when either list is empty.
    pub fn new(
        game_name: impl Into<String>,
        players: &'a mut [P],
        grids: &'a mut [G],
    ) -> Result<Self, SessionError> {
        let core = SessionCore::new(game_name, players)?;
        if grids.is_empty() {
            return Err(SessionError::config("a session needs at least one board space"));
        }
        Ok(Self {
            core,
            grids,
            current_player_index: 0,
            turns_played: 0,
            require_init: true,
            history: Vector::new(),
            history_limit: None,
        })
    }

    /// Allow or forbid turns before `init`.
    ///
    /// When allowed, players start wherever their own construction put them.
    #[must_use]
    pub fn with_require_init(mut self, require: bool) -> Self {
        self.require_init = require;
        self
    }

    /// Keep at most `limit` reports in `history`, dropping the oldest first.
    ///
    /// `None` (the default) keeps every turn, which grows without bound on
    /// long runs.
    #[must_use]
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self.trim_history();
        self
    }

    /// Board spaces in loop order.
    #[must_use]
    pub fn grids(&self) -> &[G] {
        &*self.grids
    }

    /// Mutable access to player state. The roster length stays fixed.
    pub fn players_mut(&mut self) -> &mut [P] {
        self.core.players_mut()
    }

    /// Index of the player whose turn is next.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> &P {
        &self.core.players()[self.current_player_index]
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Reports for completed turns, oldest first. Only the most recent ones
    /// are kept when a history limit is set.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnReport> {
        &self.history
    }

    /// Play one full turn for the current player.
    ///
    /// Rolls the player's dice, moves them `(position + roll) mod board size`,
    /// applies the landed space's effect and passes the turn to the next seat.
    /// Turn order never skips anyone, whatever happened during the turn.
    ///
    /// On error nothing changes: the player does not move and the turn does
    /// not pass.
    pub fn advance_turn(&mut self) -> Result<TurnReport, SessionError> {
        match self.core.phase() {
            SessionPhase::Ended => return Err(SessionError::SessionEnded),
            SessionPhase::Created if self.require_init => return Err(SessionError::NotInitialized),
            _ => {}
        }

        let board_size = self.grids.len();
        let player_count = self.core.players().len();
        let turn = self
            .turns_played
            .checked_add(1)
            .ok_or(SessionError::TurnLimitReached(self.turns_played))?;

        let player = &mut self.core.players_mut()[self.current_player_index];
        let roll = match player.roll_dice() {
            Ok(roll) => roll,
            Err(err) => {
                warn!(turn, player = %player.id(), error = %err, "turn rejected");
                return Err(err);
            }
        };

        let from = player.position();
        let to = advance_position(from, roll.total(), board_size);
        player.set_position(to);

        let grid = &mut self.grids[to];
        let description = grid.effect(player);

        let report = TurnReport {
            turn,
            player: player.id(),
            wrapped: (from % board_size).saturating_add(roll.total() as usize) >= board_size,
            roll,
            from,
            to,
            space: grid.name().to_string(),
            description,
        };

        info!(
            turn,
            player = %report.player,
            roll = report.roll.total(),
            from,
            to,
            space = %report.space,
            "{}",
            report.description
        );

        self.current_player_index = (self.current_player_index + 1) % player_count;
        self.turns_played = turn;
        self.history.push_back(report.clone());
        self.trim_history();

        Ok(report)
    }

    fn trim_history(&mut self) {
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }
}

/// New board index after moving `steps` spaces from `position` on a loop of
/// `board_size` spaces.
///
/// `board_size` must be non-zero.
#[must_use]
pub fn advance_position(position: usize, steps: u32, board_size: usize) -> usize {
    (position % board_size + steps as usize % board_size) % board_size
}

impl<'a, P, G> GameSession for MonopolySession<'a, P, G>
where
    P: Player,
    G: Grid<P>,
{
    type Player = P;

    fn name(&self) -> &str {
        self.core.name()
    }

    fn init(&mut self) {
        self.core.init();
    }

    fn end(&mut self) -> SessionSummary {
        self.core.end(self.turns_played)
    }

    fn players(&self) -> &[P] {
        self.core.players()
    }

    fn phase(&self) -> SessionPhase {
        self.core.phase()
    }
}

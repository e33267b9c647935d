//! Building players and boards from a `SessionConfig`.

use tracing::debug;

use super::session::MonopolySession;
use crate::board::Space;
use crate::core::{Dice, GameRng, PlayerId, SessionConfig, SessionError, Token};

const TOKEN_NAMES: [&str; 8] = ["Dog", "Hat", "Car", "Boot", "Ship", "Iron", "Thimble", "Wheelbarrow"];

/// Flat fee charged by tax spaces on the standard board.
pub const TAX_AMOUNT: i64 = 100;

/// Flat payment from dividend spaces on the standard board.
pub const DIVIDEND_AMOUNT: i64 = 50;

/// Owns the roster and board a session is played over.
///
/// The session itself borrows from the table, so the table must outlive it.
#[derive(Clone, Debug)]
pub struct Table {
    config: SessionConfig,
    pub players: Vec<Token>,
    pub board: Vec<Space>,
}

impl Table {
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Open a session over this table's players and board.
    pub fn session(&mut self) -> Result<MonopolySession<'_, Token, Space>, SessionError> {
        let session = MonopolySession::new(self.config.name.clone(), &mut self.players, &mut self.board)?;
        Ok(session
            .with_require_init(self.config.require_init)
            .with_history_limit(self.config.history_limit))
    }
}

/// Builder for a `Table`.
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the config and create the players and board.
    ///
    /// Every seat gets its own dice stream forked from the config seed, so the
    /// same seed always replays the same game.
    pub fn build(self) -> Result<Table, SessionError> {
        self.config.validate()?;

        let mut table_rng = GameRng::new(self.config.seed);
        let players = PlayerId::all(self.config.player_count)
            .map(|id| -> Result<Token, SessionError> {
                let dice = Dice::new(self.config.dice_count, self.config.dice_sides, table_rng.fork())?;
                Ok(Token::new(id, token_name(id), self.config.starting_cash, dice))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let board = standard_board(self.config.board_size, self.config.start_bonus);

        debug!(
            players = players.len(),
            spaces = board.len(),
            seed = self.config.seed,
            "table built"
        );

        Ok(Table {
            config: self.config,
            players,
            board,
        })
    }
}

fn token_name(id: PlayerId) -> String {
    TOKEN_NAMES
        .get(id.index())
        .map_or_else(|| id.to_string(), |name| (*name).to_string())
}

/// A board of `size` spaces.
///
/// Space 0 is the start. Every tenth space after it is free parking; spaces
/// ending in 4 charge `TAX_AMOUNT`, spaces ending in 7 pay `DIVIDEND_AMOUNT`;
/// everything else is a plain street.
#[must_use]
pub fn standard_board(size: usize, start_bonus: i64) -> Vec<Space> {
    (0..size)
        .map(|i| match (i, i % 10) {
            (0, _) => Space::start(start_bonus),
            (_, 0) => Space::plain("Free Parking"),
            (_, 4) => Space::cash("Income Tax", -TAX_AMOUNT),
            (_, 7) => Space::cash("Dividend", DIVIDEND_AMOUNT),
            _ => Space::plain(format!("Street {i}")),
        })
        .collect()
}

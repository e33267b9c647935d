//! Turn-loop behaviour through the public API.
//!
//! Players here use scripted dice so every move is known in advance.

use rust_monopoly::board::{Grid, Space};
use rust_monopoly::core::{Player, PlayerId, Roll, SessionError};
use rust_monopoly::games::monopoly::MonopolySession;
use rust_monopoly::rules::{GameSession, SessionPhase};

/// Player that replays a fixed list of roll totals, cycling when exhausted.
#[derive(Debug)]
struct Scripted {
    id: PlayerId,
    name: String,
    position: usize,
    cash: i64,
    rolls: Vec<u32>,
    next: usize,
}

impl Scripted {
    fn new(id: u8, rolls: &[u32]) -> Self {
        Self {
            id: PlayerId::new(id),
            name: format!("S{id}"),
            position: 0,
            cash: 0,
            rolls: rolls.to_vec(),
            next: 0,
        }
    }
}

impl Player for Scripted {
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
        let total = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        Roll::single(self.id, total)
    }

    fn cash(&self) -> i64 {
        self.cash
    }

    fn adjust_cash(&mut self, amount: i64) {
        self.cash += amount;
    }
}

/// Space that records who landed on it.
#[derive(Debug)]
struct Recorder {
    name: String,
    visitors: Vec<PlayerId>,
}

impl Recorder {
    fn named(index: usize) -> Self {
        Self {
            name: format!("G{index}"),
            visitors: Vec::new(),
        }
    }
}

impl<P: Player> Grid<P> for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn effect(&mut self, player: &mut P) -> String {
        self.visitors.push(player.id());
        format!("{} visited {}", player.name(), self.name)
    }
}

fn recorders(count: usize) -> Vec<Recorder> {
    (0..count).map(Recorder::named).collect()
}

#[test]
fn test_two_players_four_spaces() {
    let mut players = vec![Scripted::new(0, &[3]), Scripted::new(1, &[5])];
    let mut board = recorders(4);

    {
        let mut session = MonopolySession::new("Scenario", &mut players, &mut board).unwrap();
        session.init();

        let report = session.advance_turn().unwrap();
        assert_eq!(report.to, 3);
        assert_eq!(report.description, "S0 visited G3");
        assert_eq!(session.current_player_index(), 1);

        let report = session.advance_turn().unwrap();
        assert_eq!(report.to, 1);
        assert_eq!(report.description, "S1 visited G1");
        assert_eq!(session.current_player_index(), 0);
    }

    // The driver still owns everything once the session is gone
    assert_eq!(players[0].position(), 3);
    assert_eq!(players[1].position(), 1);
    assert_eq!(board[3].visitors, vec![PlayerId::new(0)]);
    assert_eq!(board[1].visitors, vec![PlayerId::new(1)]);
    assert!(board[0].visitors.is_empty());
    assert!(board[2].visitors.is_empty());
}

#[test]
fn test_init_places_everyone_at_start() {
    let mut players: Vec<_> = (0..5).map(|i| Scripted::new(i, &[1])).collect();
    for (i, p) in players.iter_mut().enumerate() {
        p.position = i * 3;
    }
    let mut board = recorders(6);

    let mut session = MonopolySession::new("Init", &mut players, &mut board).unwrap();
    session.init();

    assert!(session.players().iter().all(|p| p.position() == 0));
    assert_eq!(session.phase(), SessionPhase::Running);
}

#[test]
fn test_init_twice_matches_init_once() {
    let mut players = vec![Scripted::new(0, &[2]), Scripted::new(1, &[3])];
    let mut board = recorders(5);

    let mut session = MonopolySession::new("Twice", &mut players, &mut board).unwrap();
    session.init();
    session.advance_turn().unwrap();
    session.init();
    session.init();

    assert!(session.players().iter().all(|p| p.position() == 0));
}

#[test]
fn test_multiple_of_board_size_returns_to_start() {
    let mut players = vec![Scripted::new(0, &[12, 6])];
    let mut board = recorders(6);

    let mut session = MonopolySession::new("Loop", &mut players, &mut board).unwrap();
    session.init();

    assert_eq!(session.advance_turn().unwrap().to, 0);
    assert_eq!(session.advance_turn().unwrap().to, 0);
}

#[test]
fn test_round_robin_no_skips() {
    let mut players: Vec<_> = (0..4).map(|i| Scripted::new(i, &[1, 2, 3])).collect();
    let mut board = recorders(7);

    let mut session = MonopolySession::new("Order", &mut players, &mut board).unwrap();
    session.init();

    let order: Vec<u8> = (0..12).map(|_| session.advance_turn().unwrap().player.0).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn test_single_player_single_space() {
    let mut players = vec![Scripted::new(0, &[4, 9])];
    let mut board = recorders(1);

    let mut session = MonopolySession::new("Tiny", &mut players, &mut board).unwrap();
    session.init();

    for _ in 0..5 {
        let report = session.advance_turn().unwrap();
        assert_eq!(report.to, 0);
        assert_eq!(session.current_player_index(), 0);
    }
    assert_eq!(session.grids()[0].visitors.len(), 5);
}

#[test]
fn test_lifecycle_errors() {
    let mut players = vec![Scripted::new(0, &[1])];
    let mut board = recorders(3);

    let mut session = MonopolySession::new("Lifecycle", &mut players, &mut board).unwrap();
    assert_eq!(session.phase(), SessionPhase::Created);
    assert_eq!(session.advance_turn().unwrap_err(), SessionError::NotInitialized);

    session.init();
    session.advance_turn().unwrap();

    let summary = session.end();
    assert_eq!(summary.game_name, "Lifecycle");
    assert_eq!(summary.turns_played, 1);
    assert_eq!(session.advance_turn().unwrap_err(), SessionError::SessionEnded);
}

#[test]
fn test_invalid_roll_is_rejected() {
    let mut players = vec![Scripted::new(0, &[0])];
    let mut board = recorders(3);

    let mut session = MonopolySession::new("Zero", &mut players, &mut board).unwrap();
    session.init();

    let err = session.advance_turn().unwrap_err();
    assert_eq!(err, SessionError::InvalidRoll { player: PlayerId::new(0), total: 0 });
    assert!(session.grids().iter().all(|g| g.visitors.is_empty()));
}

#[test]
fn test_empty_collections_rejected_at_construction() {
    let mut players = vec![Scripted::new(0, &[1])];
    let mut no_board: Vec<Recorder> = Vec::new();
    assert!(matches!(
        MonopolySession::new("NoBoard", &mut players, &mut no_board),
        Err(SessionError::InvalidConfiguration(_))
    ));

    let mut no_players: Vec<Scripted> = Vec::new();
    let mut board = recorders(2);
    assert!(matches!(
        MonopolySession::new("NoPlayers", &mut no_players, &mut board),
        Err(SessionError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_stock_spaces_with_scripted_players() {
    let mut players = vec![Scripted::new(0, &[1, 1, 1])];
    let mut board = vec![Space::start(200), Space::cash("Income Tax", -100), Space::cash("Dividend", 50)];

    let mut session = MonopolySession::new("Cash", &mut players, &mut board).unwrap();
    session.init();
    for _ in 0..3 {
        session.advance_turn().unwrap();
    }

    // -100 + 50 + 200
    assert_eq!(session.players()[0].cash(), 150);
    let summary = session.end();
    assert_eq!(summary.richest(), Some(PlayerId::new(0)));
}

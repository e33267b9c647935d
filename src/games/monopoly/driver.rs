//! Drivers that run a session from `init` to `end`.

use tracing::info;

use super::session::{MonopolySession, TurnReport};
use crate::board::Grid;
use crate::core::{Player, SessionError};
use crate::rules::{GameSession, SessionSummary};

/// Play exactly `turns` turns, then end the session.
pub fn play<P, G>(session: &mut MonopolySession<'_, P, G>, turns: u32) -> Result<SessionSummary, SessionError>
where
    P: Player,
    G: Grid<P>,
{
    play_until(session, turns, |_| false)
}

/// Play up to `max_turns` turns, stopping early once `stop` returns true for a
/// completed turn, then end the session.
///
/// A failed turn aborts the run and the error is returned; the session is
/// left running so the caller can inspect it or call `end` itself.
pub fn play_until<P, G, F>(
    session: &mut MonopolySession<'_, P, G>,
    max_turns: u32,
    mut stop: F,
) -> Result<SessionSummary, SessionError>
where
    P: Player,
    G: Grid<P>,
    F: FnMut(&TurnReport) -> bool,
{
    session.init();

    for _ in 0..max_turns {
        let report = session.advance_turn()?;
        if stop(&report) {
            info!(turn = report.turn, "stop condition reached");
            break;
        }
    }

    Ok(session.end())
}

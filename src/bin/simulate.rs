//! Run a seeded Monopoly-style session from the command line.
//!
//! ```text
//! simulate --players 3 --turns 60 --seed 7 -v
//! simulate --config table.json -vv
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rust_monopoly::core::SessionConfig;
use rust_monopoly::games::monopoly::{play, SessionBuilder};
use tracing::info;

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Play a seeded board-loop session and print the standings")]
struct Args {
    /// JSON session config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of players
    #[arg(short, long)]
    players: Option<usize>,

    /// Number of spaces on the board
    #[arg(long)]
    board_size: Option<usize>,

    /// Dice seed (for reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Turns to play before ending the session
    #[arg(short, long, default_value = "100")]
    turns: u32,

    /// Turn reports kept in memory (the standings never need more)
    #[arg(long)]
    history_limit: Option<usize>,

    /// Log every turn (-v), and every dice face too (-vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Only the latest turns are kept unless the config or a flag says otherwise.
const DEFAULT_HISTORY_LIMIT: usize = 1_000;

fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn load_config(args: &Args) -> Result<SessionConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => SessionConfig::default(),
    };

    if let Some(players) = args.players {
        config.player_count = players;
    }
    if let Some(size) = args.board_size {
        config.board_size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.history_limit = args
        .history_limit
        .or(config.history_limit)
        .or(Some(DEFAULT_HISTORY_LIMIT));

    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(log_filter(args.verbose)).init();

    let config = load_config(&args)?;
    info!(?config, "starting simulation");

    let mut table = SessionBuilder::from_config(config).build()?;
    let mut session = table.session()?;
    let summary = play(&mut session, args.turns)?;

    println!("{} finished after {} turns", summary.game_name, summary.turns_played);
    for (rank, standing) in summary.standings.iter().enumerate() {
        println!("{:>2}. {:<12} {:>8}", rank + 1, standing.name, standing.cash);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(5), "debug");
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::parse_from(["simulate", "-vv", "--history-limit", "5", "-p", "3"]);
        assert_eq!(args.verbose, 2);

        let config = load_config(&args).unwrap();
        assert_eq!(config.player_count, 3);
        assert_eq!(config.history_limit, Some(5));
    }

    #[test]
    fn test_history_capped_by_default() {
        let args = Args::parse_from(["simulate"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }
}

//! Plongé - a two-player submerged-word duel
//!
//! Each round both players get a reference word and must type a dictionary
//! word hidden in it, letters in order. Hit hard, miss and bleed.

mod app;
mod error;
mod game;
mod tui;

use app::{GameConfig, Match};
use clap::Parser;
use error::GameError;
use game::dictionary::{Dictionary, DEFAULT_DICTIONARY_PATH};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tui::TerminalConsole;

/// Two players, one reference word each, a few seconds to find a word hidden inside it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Word list, one word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Starting health of each player
    #[arg(long, default_value_t = game::STARTING_HEALTH)]
    health: i32,

    /// Seconds allowed per move
    #[arg(long, default_value_t = game::TIME_BUDGET_SECS)]
    time: u64,

    /// Seed for reference word draws
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "Player 1")]
    player1: String,

    #[arg(long, default_value = "Player 2")]
    player2: String,
}

fn run(opts: Opts) -> Result<(), GameError> {
    let dictionary = Dictionary::load(&opts.dictionary)?;
    if dictionary.is_empty() {
        println!("Dictionary {} is missing or empty", opts.dictionary.display());
    }

    let config = GameConfig {
        starting_health: opts.health,
        time_budget: Duration::from_secs(opts.time),
        player_names: [opts.player1, opts.player2],
        ..Default::default()
    };
    let rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut game = Match::new(config, dictionary, rng)?;
    let mut console = TerminalConsole::stdio();
    game.run(&mut console)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();
    debug!("command line options: {:?}", opts);

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

use hangman::logging::setup_logging;
use hangman::{AnswerPool, CsvStore, GameSession};

#[derive(Parser, Debug)]
#[command(name = "hangman", about = "Play Hangman in the terminal")]
struct Config {
    /// Directory holding answers.csv, scoreboard.csv and ux_data.csv
    #[arg(short = 'd', long, default_value = "DATA")]
    data_dir: PathBuf,

    /// Seed for answer selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = setup_logging(&config.data_dir.join("logs"), &config.log_level)?;
    log::info!("hangman {} starting (data dir: {})", hangman::VERSION, config.data_dir.display());

    let store = CsvStore::new(&config.data_dir);
    let answers = AnswerPool::load(store.answers_path())?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let mut session = GameSession::new(store, answers, rng, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}

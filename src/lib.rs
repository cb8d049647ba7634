//! # Hangman Game Library
//!
//! A terminal word-guessing game with a persistent leaderboard.
//!
//! ## Features
//!
//! - **Round Evaluator**: masking, lives and win/loss rules for one round
//! - **Answer Pool**: CSV-backed pool of answers with random selection
//! - **Stores**: CSV scoreboard and user-interaction log behind a store trait
//! - **Game Session**: the interactive prompt loop, generic over its I/O
//!
//! ## Usage
//!
//! ```rust
//! use hangman::game::round::{Round, RoundStatus};
//! use hangman::game::answer::Answer;
//!
//! let mut round = Round::new(Answer::new("cat").unwrap());
//! round.submit_guess('c').unwrap();
//! round.submit_guess('a').unwrap();
//! assert_eq!(round.mask().to_string(), "c a _");
//! round.submit_guess('t').unwrap();
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Answer pool loading
pub mod data;

/// Scoreboard and action log persistence
pub mod recording;

/// Interactive game session
pub mod services;

/// Terminal rendering helpers
pub mod utils;

/// File logging setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::answer::Answer;
pub use game::round::{GuessResult, Round, RoundStatus, STARTING_LIVES};

pub use data::answer_pool::AnswerPool;

pub use recording::{CsvStore, MemoryStore, RecordStore};

pub use services::game_session::{GameOutcome, GameSession};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Hangman library
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    #[error("invalid guess {0:?}: guesses must be a single letter")]
    InvalidGuess(char),

    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(char),

    #[error("the round is already over")]
    RoundOver,

    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("the answer pool is empty")]
    EmptyAnswerPool,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HangmanError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

//! Persistence for everything that outlives a game.
//!
//! # Components
//!
//! - `scoreboard`: per-player win tally and leaderboard rendering
//! - `action_log`: timestamped log of player actions
//! - `store`: the `RecordStore` trait with CSV and in-memory backends

pub mod action_log;
pub mod scoreboard;
pub mod store;

pub use action_log::{Action, ActionLog, ActionRecord};
pub use scoreboard::{ScoreEntry, Scoreboard, LEADERBOARD_SIZE, POINTS_PER_GAME};
pub use store::{CsvStore, MemoryStore, RecordStore};

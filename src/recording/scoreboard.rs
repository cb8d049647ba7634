//! Per-player win tally.
//!
//! Format: `Username,Points`, where Points is the number of games won.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::{Read, Write};

/// Multiplier applied to wins when the leaderboard is shown.
pub const POINTS_PER_GAME: u32 = 10;

/// Number of players shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Points")]
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let entries = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ScoreEntry>, _>>()?;
        Ok(Self { entries })
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        if self.entries.is_empty() {
            writer.write_record(["Username", "Points"])?;
        }
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn points(&self, username: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.username == username)
            .map(|e| e.points)
    }

    /// Record the end of a game. A loss still registers a new player with 0 points.
    pub fn record(&mut self, username: &str, won: bool) {
        let gained = u32::from(won);
        match self.entries.iter_mut().find(|e| e.username == username) {
            Some(entry) => entry.points += gained,
            None => self.entries.push(ScoreEntry {
                username: username.to_string(),
                points: gained,
            }),
        }
    }

    /// Highest scores first; ties are ordered by name.
    pub fn top(&self, n: usize) -> Vec<&ScoreEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.username.cmp(&b.username)));
        sorted.truncate(n);
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Leaderboard text for the top players, points scaled by [`POINTS_PER_GAME`].
    pub fn render_leaderboard(&self) -> String {
        let top = self.top(LEADERBOARD_SIZE);
        let width = top
            .iter()
            .map(|e| e.username.chars().count())
            .max()
            .unwrap_or(0)
            .max("Username".len());

        let mut out = String::from("=====THE LEADERBOARD=====\n");
        let _ = writeln!(out, "{:<width$}  Points", "Username", width = width);
        for entry in top {
            let _ = writeln!(
                out,
                "{:<width$}  {}",
                entry.username,
                entry.points * POINTS_PER_GAME,
                width = width
            );
        }
        out.push_str("=========================\n");
        out
    }
}

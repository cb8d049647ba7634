//! User-interaction log.
//!
//! Format: `Time,Username,Action` with RFC 3339 UTC timestamps.

use crate::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// Something the player did, stored as a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartGame,
    /// A line accepted at the guess prompt, repeats and `quit` included.
    Input(String),
    QuitGame,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::StartGame => write!(f, "sg"),
            Action::Input(input) => write!(f, "i{}", input),
            Action::QuitGame => write!(f, "qg"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Action")]
    pub action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ActionRecord>, _>>()?;
        Ok(Self { records })
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        if self.records.is_empty() {
            writer.write_record(["Time", "Username", "Action"])?;
        }
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn append(&mut self, username: &str, action: &Action) {
        let record = ActionRecord {
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            username: username.to_string(),
            action: action.to_string(),
        };
        log::debug!("action {} by {:?}", record.action, record.username);
        self.records.push(record);
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_action_codes() {
        assert_eq!(Action::StartGame.to_string(), "sg");
        assert_eq!(Action::Input("e".to_string()).to_string(), "ie");
        assert_eq!(Action::Input("quit".to_string()).to_string(), "iquit");
        assert_eq!(Action::QuitGame.to_string(), "qg");
    }

    #[test]
    fn test_append_stamps_time() {
        let mut log = ActionLog::new();
        log.append("alex", &Action::StartGame);

        let record = &log.records()[0];
        assert_eq!(record.username, "alex");
        assert_eq!(record.action, "sg");
        assert!(DateTime::parse_from_rfc3339(&record.time).is_ok());
    }

    #[test]
    fn test_existing_records_are_kept_on_write() {
        let csv = "Time,Username,Action\n2021-11-04T10:00:00Z,alex,sg\n";
        let mut log = ActionLog::from_reader(csv.as_bytes()).unwrap();
        log.append("alex", &Action::QuitGame);

        let mut out = Vec::new();
        log.write_to(&mut out).unwrap();
        let reloaded = ActionLog::from_reader(out.as_slice()).unwrap();

        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.records()[0].time, "2021-11-04T10:00:00Z");
        assert_eq!(reloaded.records()[1].action, "qg");
    }

    #[test]
    fn test_empty_log_writes_header() {
        let mut out = Vec::new();
        ActionLog::new().write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Time,Username,Action\n");
    }
}

use crate::recording::action_log::ActionLog;
use crate::recording::scoreboard::Scoreboard;
use crate::Result;
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

pub const SCOREBOARD_FILE: &str = "scoreboard.csv";
pub const ACTION_LOG_FILE: &str = "ux_data.csv";
pub const ANSWERS_FILE: &str = "answers.csv";

/// Persistence for the scoreboard and the action log.
///
/// A store that has never been saved loads as empty.
pub trait RecordStore {
    fn load_scoreboard(&self) -> Result<Scoreboard>;
    fn save_scoreboard(&self, scoreboard: &Scoreboard) -> Result<()>;
    fn load_actions(&self) -> Result<ActionLog>;
    fn save_actions(&self, actions: &ActionLog) -> Result<()>;
}

/// CSV files under a data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn scoreboard_path(&self) -> PathBuf {
        self.data_dir.join(SCOREBOARD_FILE)
    }

    pub fn actions_path(&self) -> PathBuf {
        self.data_dir.join(ACTION_LOG_FILE)
    }

    pub fn answers_path(&self) -> PathBuf {
        self.data_dir.join(ANSWERS_FILE)
    }

    /// `None` when the file does not exist yet.
    fn open_existing(path: &Path) -> Result<Option<BufReader<File>>> {
        match File::open(path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{} not found, starting empty", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create(&self, path: &Path) -> Result<BufWriter<File>> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(BufWriter::new(File::create(path)?))
    }
}

impl RecordStore for CsvStore {
    fn load_scoreboard(&self) -> Result<Scoreboard> {
        match Self::open_existing(&self.scoreboard_path())? {
            Some(reader) => Scoreboard::from_reader(reader),
            None => Ok(Scoreboard::new()),
        }
    }

    fn save_scoreboard(&self, scoreboard: &Scoreboard) -> Result<()> {
        let path = self.scoreboard_path();
        scoreboard.write_to(self.create(&path)?)?;
        log::info!("Saved {} scoreboard entries to {}", scoreboard.len(), path.display());
        Ok(())
    }

    fn load_actions(&self) -> Result<ActionLog> {
        match Self::open_existing(&self.actions_path())? {
            Some(reader) => ActionLog::from_reader(reader),
            None => Ok(ActionLog::new()),
        }
    }

    fn save_actions(&self, actions: &ActionLog) -> Result<()> {
        let path = self.actions_path();
        actions.write_to(self.create(&path)?)?;
        log::info!("Saved {} actions to {}", actions.len(), path.display());
        Ok(())
    }
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scoreboard: RefCell<Scoreboard>,
    actions: RefCell<ActionLog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoreboard(scoreboard: Scoreboard) -> Self {
        Self {
            scoreboard: RefCell::new(scoreboard),
            actions: RefCell::default(),
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard.borrow().clone()
    }

    pub fn actions(&self) -> ActionLog {
        self.actions.borrow().clone()
    }
}

impl RecordStore for MemoryStore {
    fn load_scoreboard(&self) -> Result<Scoreboard> {
        Ok(self.scoreboard())
    }

    fn save_scoreboard(&self, scoreboard: &Scoreboard) -> Result<()> {
        *self.scoreboard.borrow_mut() = scoreboard.clone();
        Ok(())
    }

    fn load_actions(&self) -> Result<ActionLog> {
        Ok(self.actions())
    }

    fn save_actions(&self, actions: &ActionLog) -> Result<()> {
        *self.actions.borrow_mut() = actions.clone();
        Ok(())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load_scoreboard(&self) -> Result<Scoreboard> {
        (**self).load_scoreboard()
    }

    fn save_scoreboard(&self, scoreboard: &Scoreboard) -> Result<()> {
        (**self).save_scoreboard(scoreboard)
    }

    fn load_actions(&self) -> Result<ActionLog> {
        (**self).load_actions()
    }

    fn save_actions(&self, actions: &ActionLog) -> Result<()> {
        (**self).save_actions(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::action_log::Action;
    use tempfile::tempdir;

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("DATA"));

        assert!(store.load_scoreboard().unwrap().is_empty());
        assert!(store.load_actions().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_directory_and_reloads() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("DATA"));

        let mut board = Scoreboard::new();
        board.record("alex", true);
        store.save_scoreboard(&board).unwrap();

        let mut actions = ActionLog::new();
        actions.append("alex", &Action::StartGame);
        store.save_actions(&actions).unwrap();

        assert!(store.scoreboard_path().exists());
        assert_eq!(store.load_scoreboard().unwrap(), board);
        assert_eq!(store.load_actions().unwrap(), actions);
    }

    #[test]
    fn test_corrupt_scoreboard_is_reported() {
        let dir = tempdir().unwrap();
        let store = CsvStore::new(dir.path());
        fs::write(store.scoreboard_path(), "Username,Points\nalex,many\n").unwrap();

        assert!(store.load_scoreboard().is_err());
    }

    #[test]
    fn test_memory_store_through_reference() {
        fn save<S: RecordStore>(store: S, board: &Scoreboard) {
            store.save_scoreboard(board).unwrap();
        }

        let store = MemoryStore::new();
        let mut board = Scoreboard::new();
        board.record("sam", true);

        save(&store, &board);
        assert_eq!(store.scoreboard().points("sam"), Some(1));
    }
}

//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Temporary state files backing a real TaskStore
//! - Models pre-populated with tasks
//! - Key event injection

use std::path::PathBuf;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use duly::config::Config;
use duly::tea::{update, Command, Message, Model};
use duly::{Priority, TaskDraft, TaskManager, TaskStore};

/// A temporary directory holding a state file.
pub struct TestEnv {
    /// Kept alive for the duration of the test.
    pub temp_dir: TempDir,
    /// Path to the state file inside the temp dir.
    pub state_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let state_path = temp_dir.path().join("tasks.json");
        Self {
            temp_dir,
            state_path,
        }
    }

    /// A fresh store over this environment's state file.
    pub fn store(&self) -> TaskStore {
        TaskStore::new(self.state_path.clone())
    }

    /// A manager loading whatever the state file currently holds.
    pub fn manager(&self) -> TaskManager {
        TaskManager::load(self.store())
    }

    /// A model over a freshly loaded manager.
    pub fn model(&self) -> Model {
        Model::new(self.manager(), Config::default())
    }
}

pub fn draft(title: &str, priority: Priority, due: Option<NaiveDate>) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: String::new(),
        priority,
        due_date: due,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Send one key press through the update function.
pub fn press(model: &mut Model, code: KeyCode) -> Vec<Command> {
    update(
        model,
        Message::Key(KeyEvent::new(code, KeyModifiers::empty())),
    )
}

/// Type a string character by character.
pub fn type_str(model: &mut Model, s: &str) {
    for c in s.chars() {
        press(model, KeyCode::Char(c));
    }
}

/// Execute the commands a test update produced, persisting when asked.
/// Returns true when a Quit was requested.
pub fn run_commands(model: &mut Model, cmds: Vec<Command>) -> bool {
    let mut quit = false;
    for cmd in cmds {
        match cmd {
            Command::SaveState => model.manager.persist().expect("persist failed"),
            Command::Quit => quit = true,
        }
    }
    quit
}

//! Durable persistence for the task collection.
//!
//! The whole collection is serialized as one JSON blob under a fixed
//! file path. Saves are full-replace, last-write-wins; loads fall back
//! to an empty collection when the file is absent or unparseable.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::task::Task;
use crate::{dlog_debug, dlog_warn, Result};

const STATE_VERSION: u32 = 1;

/// The serialized state blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateBlob {
    version: u32,
    tasks: Vec<Task>,
}

/// Persistence adapter for the task collection.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store writing to the given state file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the configured default location (~/.duly/tasks.json).
    pub fn open_default(config: &Config) -> Result<Self> {
        config.ensure_dirs()?;
        Ok(Self::new(config.state_path()?))
    }

    /// Path of the underlying state file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the task collection from disk.
    ///
    /// Returns an empty collection when the file does not exist or when
    /// the stored content cannot be parsed. Corrupt data never crashes
    /// the app; it is logged and replaced on the next save.
    pub fn load(&self) -> Vec<Task> {
        dlog_debug!("TaskStore::load path={}", self.path.display());

        if !self.path.exists() {
            dlog_debug!("State file not found, starting empty");
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                dlog_warn!("State file unreadable, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<StateBlob>(&contents) {
            Ok(blob) => {
                dlog_debug!("State loaded: {} tasks", blob.tasks.len());
                blob.tasks
            }
            Err(e) => {
                dlog_warn!("State file corrupt, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Write the full task collection to disk, replacing the prior blob.
    ///
    /// The write is atomic (temp file + rename) and keeps a `.bak` copy
    /// of the previous state.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        dlog_debug!("TaskStore::save tasks={}", tasks.len());

        let blob = StateBlob {
            version: STATE_VERSION,
            tasks: tasks.to_vec(),
        };
        let contents = serde_json::to_string_pretty(&blob)?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            fs::copy(&self.path, &backup_path)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &contents)?;
        fs::rename(&temp_path, &self.path)?;
        dlog_debug!("State saved: {}", self.path.display());

        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{dlog_debug, Error, Result};

fn default_confirm_delete() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Override for the directory holding the task state file.
    pub data_dir: Option<String>,
    /// Ask before deleting a task (Enter to confirm, Esc to cancel).
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            confirm_delete: true,
        }
    }
}

impl Config {
    pub fn duly_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".duly"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::duly_dir()?.join("duly.toml"))
    }

    /// Directory holding the state file, honoring the `data_dir` override.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(expand_tilde(dir)),
            None => Self::duly_dir(),
        }
    }

    pub fn state_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("tasks.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        dlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            dlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        dlog_debug!(
            "Config loaded: data_dir={:?}, confirm_delete={}",
            config.data_dir,
            config.confirm_delete
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let duly_dir = Self::duly_dir()?;
        dlog_debug!("Config::save duly_dir={}", duly_dir.display());
        if !duly_dir.exists() {
            fs::create_dir_all(&duly_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        dlog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        let data_dir = self.data_dir()?;
        dlog_debug!("Config::ensure_dirs data={}", data_dir.display());
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

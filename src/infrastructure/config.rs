//! Configuration management

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NotaError, Result};

/// Name of the optional settings file, looked up in the working directory.
pub const CONFIG_FILE: &str = "nota.toml";

/// Where notes are kept. `sql` is representable but not yet backed by an
/// implementation; the selector rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Json,
    Sql,
    Memory,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StorageKind::Json),
            "sql" => Ok(StorageKind::Sql),
            "memory" => Ok(StorageKind::Memory),
            other => Err(format!("Unknown storage kind: {}", other)),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageKind::Json => "json",
            StorageKind::Sql => "sql",
            StorageKind::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage")]
    pub storage: StorageKind,
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_storage() -> StorageKind {
    StorageKind::Json
}

fn default_db_path() -> PathBuf {
    PathBuf::from("notes.json")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: default_storage(),
            db_path: default_db_path(),
        }
    }
}

impl Config {
    /// Resolve settings for this process: built-in defaults, then
    /// `nota.toml` in the working directory if present, then
    /// `NOTA_STORAGE` / `NOTA_DB_PATH` environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Same resolution rooted at a specific directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut config = Self::load_file_from_dir(dir)?;

        if let Ok(kind) = std::env::var("NOTA_STORAGE") {
            config.storage = kind.parse().map_err(NotaError::Config)?;
        }
        if let Ok(path) = std::env::var("NOTA_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Read `nota.toml` (or defaults) without the environment overlay.
    /// `nota config <key> <value>` edits this view, so a transient
    /// environment override never gets baked into the file.
    pub fn load_file_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Save to `nota.toml` in the given directory.
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Get a settings value by key, for `nota config <key>`.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage" => Ok(self.storage.to_string()),
            "db_path" => Ok(self.db_path.display().to_string()),
            other => Err(NotaError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Set a settings value by key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage" => {
                self.storage = value.parse().map_err(NotaError::Config)?;
                Ok(())
            }
            "db_path" => {
                self.db_path = PathBuf::from(value);
                Ok(())
            }
            other => Err(NotaError::Config(format!("Unknown config key: {}", other))),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

/// Where configuration lives. The file-backed store is used by the app;
/// tests substitute an in-memory one.
pub trait ConfigStore {
    /// Load from storage, returning defaults if absent or invalid.
    fn load(&self) -> Config;

    /// Persist to storage.
    fn save(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>>;
}

/// Stores the config as JSON under the user configuration directory.
pub struct FileStore;

impl FileStore {
    /// Directory: ~/.config/japan-assist/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("japan-assist");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Config {
        match fs::read_to_string(Self::path()) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    fn save(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        fs::create_dir_all(Self::dir())?;
        let data = serde_json::to_string_pretty(config)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }
}

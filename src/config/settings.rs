//! Application settings and configuration types.
//!
//! Settings are persisted to `settings.json` in the platform config
//! directory (`~/.config/mockmail/` on Linux) and loaded at startup.
//! A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while reading or writing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level application settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How fixtures are printed.
    pub output: OutputSettings,
    /// Where fixtures come from.
    pub fixtures: FixtureSettings,
    /// Log filtering.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Returns the default settings file location, if a home directory
    /// can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mockmail", "mockmail")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes settings to `path` as pretty JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Indent printed JSON.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Fixture source selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureSettings {
    /// Fixture document to load instead of the built-in data.
    pub path: Option<PathBuf>,
    /// Check loaded fixtures before printing them.
    pub validate: bool,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            path: None,
            validate: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl LoggingSettings {
    /// Parses `level` as a tracing filter directive.
    pub fn filter(&self) -> Result<EnvFilter> {
        Ok(EnvFilter::try_new(&self.level)?)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

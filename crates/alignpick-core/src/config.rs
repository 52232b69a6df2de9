//! Configuration management for alignpick.
//!
//! Loads configuration from ${ALIGNPICK_HOME}/config.toml with sensible
//! defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::grid::Position;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for alignpick configuration and data directories.
    //!
    //! ALIGNPICK_HOME resolution order:
    //! 1. ALIGNPICK_HOME environment variable (if set)
    //! 2. ~/.config/alignpick (default)

    use std::path::PathBuf;

    /// Returns the alignpick home directory.
    ///
    /// Checks ALIGNPICK_HOME env var first, falls back to ~/.config/alignpick
    pub fn alignpick_home() -> PathBuf {
        if let Ok(home) = std::env::var("ALIGNPICK_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("alignpick"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        alignpick_home().join("config.toml")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        alignpick_home().join("logs")
    }

    /// Returns the user's home directory, if known.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting cell for the picker, as a canonical label.
    pub initial: String,

    /// Capture mouse clicks in the interactive picker.
    pub mouse: bool,
}

impl Config {
    const DEFAULT_INITIAL: &str = "center center";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The configured starting position.
    ///
    /// Fails with context naming the config file when the stored label is not
    /// one of the nine canonical labels.
    pub fn initial_position(&self) -> Result<Position> {
        Position::from_label(&self.initial).with_context(|| {
            format!(
                "invalid `initial` in {}",
                paths::config_path().display()
            )
        })
    }

    /// Saves only the initial field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_initial(label: &str) -> Result<()> {
        Self::save_initial_to(&paths::config_path(), label)
    }

    /// Saves only the initial field to a specific config file path.
    pub fn save_initial_to(path: &Path, label: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["initial"] = value(label);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: Self::DEFAULT_INITIAL.to_string(),
            mouse: true,
        }
    }
}

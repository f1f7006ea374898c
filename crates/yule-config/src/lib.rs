//! Configuration loading for the yule greeting card.
//!
//! Settings live in a TOML file under the platform config directory
//! (e.g. `~/.config/yule/config.toml` on Linux). A missing file yields
//! the defaults; a malformed file is reported as an error rather than
//! silently ignored.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yule_core::{AccentTheme, AnimationSpeed};

/// Errors produced while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// User configuration for the greeting card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Greeting shown in the bottom banner.
    pub greeting: String,
    /// Global animation speed.
    pub speed: AnimationSpeed,
    /// Number of falling snow particles.
    pub snow_count: usize,
    /// Multiplier on the tree canopy point counts (0.1 - 2.0).
    pub density: f32,
    /// Seed for scene generation; unset means a fresh scene every run.
    pub seed: Option<u64>,
    /// Accent color for overlay text.
    pub accent: AccentTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: "Christmas Greetings from Boway!".to_owned(),
            speed: AnimationSpeed::Normal,
            snow_count: 200,
            density: 1.0,
            seed: None,
            accent: AccentTheme::Gold,
        }
    }
}

impl Config {
    /// Path of the config file, if a home directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "yule").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.density = config.density.clamp(0.1, 2.0);
        Ok(config)
    }
}

//! Configuration file support for randpick.
//!
//! Configuration is loaded from `~/.config/randpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/randpick/config.toml
//! frame_interval_ms = 16
//! seed = 1234
//! load_sample_on_start = true
//! show_timestamps = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default frame tick while animating (~60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Idle redraw interval when nothing is animating.
pub const IDLE_INTERVAL_MS: u64 = 250;

const MAX_FRAME_INTERVAL_MS: u64 = 1000;

/// Environment override for `frame_interval_ms`.
pub const FRAME_MS_ENV: &str = "RANDPICK_FRAME_MS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between animation frames
    pub frame_interval_ms: Option<u64>,

    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,

    /// Fill the editor with the sample list on startup
    pub load_sample_on_start: Option<bool>,

    /// Show the wall-clock time next to history entries
    pub show_timestamps: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => {
                crate::log::log(&format!("Loaded config from {}", config_path.display()));
                config
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                crate::log::log(&format!("Config ignored: {}", e));
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("randpick")
    }

    /// Apply environment overrides on top of file values.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_frame_ms(std::env::var(FRAME_MS_ENV).ok().as_deref())
    }

    fn with_env_frame_ms(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(self);
        };
        let ms = raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnv(FRAME_MS_ENV, raw.to_string()))?;
        self.frame_interval_ms = Some(ms);
        self.validate()?;
        Ok(self)
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        frame_interval_ms: Option<u64>,
        seed: Option<u64>,
        load_sample: bool,
    ) -> Self {
        if frame_interval_ms.is_some() {
            self.frame_interval_ms = frame_interval_ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if load_sample {
            self.load_sample_on_start = Some(true);
        }
        self
    }

    /// Reject values that would stall or spin the event loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.frame_interval_ms {
            Some(ms) if ms == 0 || ms > MAX_FRAME_INTERVAL_MS => {
                Err(ConfigError::InvalidFrameInterval(ms))
            }
            _ => Ok(()),
        }
    }

    /// Frame interval, or the default when unset.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.unwrap_or(DEFAULT_FRAME_INTERVAL_MS))
    }

    pub fn load_sample_on_start(&self) -> bool {
        self.load_sample_on_start.unwrap_or(false)
    }

    pub fn show_timestamps(&self) -> bool {
        self.show_timestamps.unwrap_or(true)
    }
}

//! Domain error types for randpick
//!
//! Provides structured error types for different domains:
//! - `PickError` for a pick that could not happen
//! - `ConfigError` for problems reading the configuration or item input
//! - `RandpickError` for startup and clipboard failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for startup and clipboard failures
#[derive(Debug, Error)]
pub enum RandpickError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Reasons a pick did not happen.
///
/// The display strings are shown to the user in place of a picked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("Please enter some items first!")]
    EmptyInput,

    #[error("All items have been picked! Reset to start over.")]
    AllPicked,
}

/// Errors related to configuration and startup input
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Invalid frame interval: {0}ms")]
    InvalidFrameInterval(u64),

    #[error("Invalid value for {0}: {1:?}")]
    InvalidEnv(&'static str, String),
}

/// Result type alias for RandpickError
pub type Result<T> = std::result::Result<T, RandpickError>;

/// Result type alias for PickError
pub type PickResult<T> = std::result::Result<T, PickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_error_messages() {
        assert_eq!(
            PickError::EmptyInput.to_string(),
            "Please enter some items first!"
        );
        assert_eq!(
            PickError::AllPicked.to_string(),
            "All items have been picked! Reset to start over."
        );
    }

    #[test]
    fn test_wraps_config_error() {
        let err: RandpickError = ConfigError::InvalidFrameInterval(0).into();
        assert_eq!(err.to_string(), "Config error: Invalid frame interval: 0ms");
    }
}

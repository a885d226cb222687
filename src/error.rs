use std::io;

use thiserror::Error;

/// Reasons a game configuration is rejected before any simulation state exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid width must be positive, got {0}")]
    NonPositiveWidth(i32),
    #[error("grid height must be positive, got {0}")]
    NonPositiveHeight(i32),
    #[error("grid width {0} is too narrow for the 3-segment starting body (minimum 4)")]
    GridTooNarrow(i32),
    #[error("base move interval must be a positive number of seconds, got {0}")]
    InvalidBaseInterval(f32),
    #[error("minimum move interval must be a positive number of seconds, got {0}")]
    InvalidMinInterval(f32),
    #[error("interval decrement must be a non-negative number of seconds, got {0}")]
    InvalidDecrement(f32),
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns true for the value-range failures (as opposed to I/O or parse failures).
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Parse(_))
    }
}

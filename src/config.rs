use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: i32 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: i32 = 20;

/// Base move interval in seconds.
pub const DEFAULT_MOVE_INTERVAL_SECS: f32 = 0.15;

/// Floor for the move interval in seconds.
pub const MIN_MOVE_INTERVAL_SECS: f32 = 0.05;

/// Amount the move interval shrinks per food eaten.
pub const MOVE_INTERVAL_DECREMENT_SECS: f32 = 0.003;

/// Number of segments in the starting body.
pub const START_BODY_LEN: i32 = 3;

/// Construction-time tuning for one game instance.
///
/// Deserializes from JSON with every field optional; missing fields fall
/// back to the reference tuning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub base_move_interval: f32,
    pub min_move_interval: f32,
    pub interval_decrement: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            base_move_interval: DEFAULT_MOVE_INTERVAL_SECS,
            min_move_interval: MIN_MOVE_INTERVAL_SECS,
            interval_decrement: MOVE_INTERVAL_DECREMENT_SECS,
        }
    }
}

impl GameConfig {
    /// Parses a config from a JSON document and validates it.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Checks every field against the ranges the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::NonPositiveWidth(self.width));
        }
        if self.height <= 0 {
            return Err(ConfigError::NonPositiveHeight(self.height));
        }
        // The head starts at width / 2 with the rest of the body trailing left.
        if self.width / 2 + 1 < START_BODY_LEN {
            return Err(ConfigError::GridTooNarrow(self.width));
        }
        if !self.base_move_interval.is_finite() || self.base_move_interval <= 0.0 {
            return Err(ConfigError::InvalidBaseInterval(self.base_move_interval));
        }
        if !self.min_move_interval.is_finite() || self.min_move_interval <= 0.0 {
            return Err(ConfigError::InvalidMinInterval(self.min_move_interval));
        }
        if !self.interval_decrement.is_finite() || self.interval_decrement < 0.0 {
            return Err(ConfigError::InvalidDecrement(self.interval_decrement));
        }

        Ok(())
    }

    /// Floor actually applied: never above the base interval, so speeding up
    /// can never lengthen the interval.
    #[must_use]
    pub fn effective_floor(&self) -> f32 {
        self.min_move_interval.min(self.base_move_interval)
    }

    /// Returns the interval after one food is eaten, clamped at the floor.
    #[must_use]
    pub fn next_interval(&self, current: f32) -> f32 {
        (current - self.interval_decrement).max(self.effective_floor())
    }
}

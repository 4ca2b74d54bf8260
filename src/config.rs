//! Sketch configuration handed over by the host page as JSON.
//!
//! Every field is optional; missing fields fall back to the defaults in
//! [`crate::consts`]. `{}` and an empty string both yield the default config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{COLLAPSE_DURATION_MS, MARKER_COLOR, MARKER_RADIUS_PX, MOVE_THROTTLE_MS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange { field: &'static str, expected: &'static str, value: f64 },
    #[error("marker_color must not be empty")]
    EmptyColor,
    #[error("unknown log_level: {0}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Duration used by the host collapse command.
    pub collapse_duration_ms: f64,
    /// Minimum spacing between pointer-move redraws.
    pub move_throttle_ms: f64,
    pub marker_radius: f64,
    /// Any CSS color string.
    pub marker_color: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            collapse_duration_ms: COLLAPSE_DURATION_MS,
            move_throttle_ms: MOVE_THROTTLE_MS,
            marker_radius: MARKER_RADIUS_PX,
            marker_color: MARKER_COLOR.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of
    /// range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("collapse_duration_ms", self.collapse_duration_ms)?;
        positive("marker_radius", self.marker_radius)?;
        if !self.move_throttle_ms.is_finite() || self.move_throttle_ms < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "move_throttle_ms",
                expected: "a finite non-negative number",
                value: self.move_throttle_ms,
            });
        }
        if self.marker_color.trim().is_empty() {
            return Err(ConfigError::EmptyColor);
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLogLevel`] for unrecognized names.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, expected: "a finite positive number", value })
    }
}

//! Free-fall run configuration
//!
//! Any field missing from a JSON config file falls back to [`SimulationConfig::default`].
//!
//! ```json
//! { "timestep": 0.05, "gravity": [0.0, -9.81, 0.0], "max_ticks": 5000 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core_types::{Seconds, Vector};
use crate::physics::STANDARD_GRAVITY;

/// Largest accepted tick cap
///
/// A run records one sample per tick, so this also bounds the size of a
/// [`Trajectory`](super::Trajectory) to about a million samples.
pub const MAX_TICK_LIMIT: u64 = 1_000_000;

/// Parameters of the explicit-Euler free-fall loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed step length in seconds
    pub timestep: f64,
    /// Acceleration applied to every object regardless of mass (m/s²)
    pub gravity: Vector,
    /// Constant force applied to the object (N), turned into an acceleration
    /// through the object's mass
    pub applied_force: Vector,
    /// Hard cap on ticks per run, between 1 and [`MAX_TICK_LIMIT`]
    pub max_ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0,
            gravity: Vector::new(0.0, -STANDARD_GRAVITY, 0.0),
            applied_force: Vector::ZERO,
            max_ticks: 100_000,
        }
    }
}

impl SimulationConfig {
    /// Check the configuration and return the validated time step
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidTimestep`] for a non-positive or non-finite
    /// time step and [`ConfigError::InvalidTickLimit`] for a tick cap of zero
    /// or above [`MAX_TICK_LIMIT`].
    pub fn validate(&self) -> Result<Seconds, ConfigError> {
        let timestep = Seconds::new(self.timestep).ok_or(ConfigError::InvalidTimestep(self.timestep))?;
        if !(1..=MAX_TICK_LIMIT).contains(&self.max_ticks) {
            return Err(ConfigError::InvalidTickLimit(self.max_ticks));
        }
        Ok(timestep)
    }

    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    /// Returns [`ConfigError::ParseFailed`] for malformed JSON, or a validation
    /// error as described in [`Self::validate`].
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    ///
    /// # Errors
    /// Returns [`ConfigError::LoadFailed`] if the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        Self::from_json_str(&contents)
    }
}

/// Errors that can occur while building a [`SimulationConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read the config file
    LoadFailed(String),
    /// Failed to parse the config file
    ParseFailed(String),
    /// Time step was not finite and strictly positive
    InvalidTimestep(f64),
    /// Tick cap was zero or above [`MAX_TICK_LIMIT`]
    InvalidTickLimit(u64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadFailed(msg) => write!(f, "Failed to load config: {msg}"),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse config: {msg}"),
            ConfigError::InvalidTimestep(dt) => {
                write!(f, "Time step must be finite and positive, got {dt}")
            }
            ConfigError::InvalidTickLimit(ticks) => {
                write!(f, "Tick limit must be between 1 and {MAX_TICK_LIMIT}, got {ticks}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(*config.validate().unwrap(), 1.0);
        assert_eq!(config.gravity, Vector::new(0.0, -9.81, 0.0));
    }

    #[test]
    fn test_rejects_bad_timestep_and_tick_cap() {
        let config = SimulationConfig {
            timestep: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTimestep(0.0)));

        let config = SimulationConfig {
            max_ticks: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTickLimit(0)));
    }

    #[test]
    fn test_tick_cap_upper_bound() {
        let config = SimulationConfig {
            max_ticks: MAX_TICK_LIMIT,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = SimulationConfig {
            max_ticks: u64::MAX,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTickLimit(u64::MAX)));

        let result = SimulationConfig::from_json_str(r#"{"max_ticks": 1000001}"#);
        assert_eq!(result, Err(ConfigError::InvalidTickLimit(1_000_001)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Tick limit must be between 1 and 1000000, got 1000001"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SimulationConfig::from_json_str(r#"{"timestep": 0.5, "gravity": [0.0, -1.62, 0.0]}"#)
                .unwrap();
        assert_eq!(config.timestep, 0.5);
        assert_eq!(config.gravity.j(), -1.62);
        assert_eq!(config.max_ticks, 100_000);
        assert_eq!(config.applied_force, Vector::ZERO);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            SimulationConfig::from_json_str("{not json"),
            Err(ConfigError::ParseFailed(_))
        ));
        assert_eq!(
            SimulationConfig::from_json_str(r#"{"timestep": -2.0}"#),
            Err(ConfigError::InvalidTimestep(-2.0))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = SimulationConfig::load("/nonexistent/freefall-config.json");
        assert!(matches!(result, Err(ConfigError::LoadFailed(_))));
    }
}

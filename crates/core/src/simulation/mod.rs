//! Free-fall simulation: configuration and the fixed-step loop

pub mod config;
pub mod runner;

pub use config::{ConfigError, SimulationConfig, MAX_TICK_LIMIT};
pub use runner::{FreeFallSimulation, SimulationError, TickSample, Trajectory};

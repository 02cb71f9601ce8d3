//! Fixed-step free-fall loop
//!
//! Each tick is one explicit-Euler step: the position moves by the current
//! velocity, then the velocity picks up gravity plus any applied force divided
//! by mass. A run stops as soon as the object's height (y) is no longer
//! positive, or when the configured tick cap is hit.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use super::config::{ConfigError, SimulationConfig};
use crate::core_types::{Point, Seconds, Vector};
use crate::physics::{KinematicsError, PhysicalObject};

/// Failure to set up a free-fall run
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The run configuration was rejected
    Config(ConfigError),
    /// The launched object was rejected
    Kinematics(KinematicsError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "Invalid simulation config: {e}"),
            SimulationError::Kinematics(e) => write!(f, "Invalid object: {e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::Kinematics(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}

impl From<KinematicsError> for SimulationError {
    fn from(e: KinematicsError) -> Self {
        SimulationError::Kinematics(e)
    }
}

/// Object state after a given tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickSample {
    pub tick: u64,
    pub position: Point,
    pub velocity: Vector,
}

/// Recorded run, starting state first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub samples: Vec<TickSample>,
    /// Tick counter when the run stopped
    pub ticks: u64,
    /// `false` if the run stopped on the tick cap while still airborne
    pub landed: bool,
}

impl Trajectory {
    pub fn final_position(&self) -> Option<Point> {
        self.samples.last().map(|s| s.position)
    }

    /// Highest height reached over the run
    pub fn apex_height(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.position.y())
            .max_by(f64::total_cmp)
    }
}

/// Single object falling under constant gravity
#[derive(Debug, Clone)]
pub struct FreeFallSimulation {
    object: PhysicalObject,
    config: SimulationConfig,
    timestep: Seconds,
    tick: u64,
}

impl FreeFallSimulation {
    /// Create a run for an existing object
    ///
    /// # Errors
    /// Returns [`SimulationError::Config`] if `config` fails validation.
    pub fn new(object: PhysicalObject, config: SimulationConfig) -> Result<Self, SimulationError> {
        let timestep = config.validate()?;
        Ok(Self {
            object,
            config,
            timestep,
            tick: 0,
        })
    }

    /// Create a run for a freshly launched object
    ///
    /// # Errors
    /// Returns [`SimulationError::Kinematics`] for an invalid mass and
    /// [`SimulationError::Config`] for an invalid configuration.
    pub fn launch(
        mass: f64,
        position: Point,
        velocity: Vector,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        let object = PhysicalObject::new(mass, position, velocity)?;
        Self::new(object, config)
    }

    pub fn object(&self) -> &PhysicalObject {
        &self.object
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated time so far, in seconds
    pub fn elapsed_time(&self) -> f64 {
        self.tick as f64 * *self.timestep
    }

    /// Height above the ground plane is still positive
    pub fn is_airborne(&self) -> bool {
        self.object.position().y() > 0.0
    }

    /// Total acceleration currently acting on the object
    pub fn acceleration(&self) -> Vector {
        self.config
            .gravity
            .add_vector(&self.object.acceleration_from_force(&self.config.applied_force))
    }

    /// Advance one tick
    pub fn step(&mut self) {
        let dv = self.acceleration().scale_uniform(*self.timestep);
        self.object.move_position_for(self.timestep);
        self.object.update_velocity(&dv);
        self.tick += 1;

        debug!(
            tick = self.tick,
            "position {} velocity {}",
            self.object.position(),
            self.object.velocity()
        );
    }

    fn sample(&self) -> TickSample {
        TickSample {
            tick: self.tick,
            position: self.object.position(),
            velocity: self.object.velocity(),
        }
    }

    /// Step until the object reaches the ground or the tick cap is hit
    ///
    /// The trajectory holds the state before the first step and after every
    /// step taken, including the one that crossed the ground plane.
    pub fn run(&mut self) -> Trajectory {
        let mut samples = vec![self.sample()];
        while self.is_airborne() && self.tick < self.config.max_ticks {
            self.step();
            samples.push(self.sample());
        }

        let landed = !self.is_airborne();
        if landed {
            info!(
                "Landed after {} ticks ({:.3} s) at {}",
                self.tick,
                self.elapsed_time(),
                self.object.position()
            );
        } else {
            warn!(
                "Stopped at tick cap {} while still airborne at {}",
                self.config.max_ticks,
                self.object.position()
            );
        }

        Trajectory {
            samples,
            ticks: self.tick,
            landed,
        }
    }
}

//! Point-mass rigid body: mass, position, velocity and restitution
//!
//! A [`PhysicalObject`] treats the algebra as a black box. Moving replaces the
//! position with `position + velocity`, accelerating replaces the velocity with
//! `velocity + Δv`, and forces become accelerations by scaling with `1 / mass`.
//!
//! # Example
//!
//! ```
//! use freefall_core::core_types::{Point, Vector};
//! use freefall_core::physics::PhysicalObject;
//!
//! let mut ball = PhysicalObject::new(
//!     5.0,
//!     Point::new(0.0, 50.0, 0.0),
//!     Vector::new(30.0, 10.0, 0.0),
//! )
//! .unwrap();
//!
//! ball.move_position();
//! ball.update_velocity(&Vector::new(0.0, -9.81, 0.0));
//! assert_eq!(ball.position(), Point::new(30.0, 60.0, 0.0));
//! ```

use serde::Serialize;
use std::fmt;

use crate::core_types::{Kilograms, Point, Seconds, Vector};

/// Rejected kinematic parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// Mass was zero, negative or not finite
    InvalidMass(f64),
    /// Restitution coefficient was outside `[0, 1]`
    InvalidRestitution(f64),
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidMass(mass) => {
                write!(f, "Mass must be finite and strictly positive, got {mass}")
            }
            KinematicsError::InvalidRestitution(value) => {
                write!(f, "Restitution must be within [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for KinematicsError {}

/// Object with mass moving through 3D space
///
/// # Properties
///
/// - **Mass**: strictly positive, kg
/// - **Position**: [`Point`], m
/// - **Velocity**: [`Vector`], m per tick (or m/s with [`Self::move_position_for`])
/// - **Restitution**: elasticity in `[0, 1]`, stored for a future collision
///   response and not read by any update
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalObject {
    mass: Kilograms,
    position: Point,
    velocity: Vector,
    restitution: f64,
}

impl PhysicalObject {
    /// Create an object with restitution 1 (perfectly elastic)
    ///
    /// # Errors
    /// Returns [`KinematicsError::InvalidMass`] unless `mass` is finite and > 0.
    pub fn new(mass: f64, position: Point, velocity: Vector) -> Result<Self, KinematicsError> {
        let mass = Kilograms::new(mass).ok_or(KinematicsError::InvalidMass(mass))?;
        Ok(PhysicalObject {
            mass,
            position,
            velocity,
            restitution: 1.0,
        })
    }

    /// Set the restitution coefficient
    ///
    /// # Errors
    /// Returns [`KinematicsError::InvalidRestitution`] if `restitution` is NaN or
    /// outside `[0, 1]`.
    pub fn with_restitution(mut self, restitution: f64) -> Result<Self, KinematicsError> {
        if !(0.0..=1.0).contains(&restitution) {
            return Err(KinematicsError::InvalidRestitution(restitution));
        }
        self.restitution = restitution;
        Ok(self)
    }

    pub fn mass(&self) -> Kilograms {
        self.mass
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Change the mass
    ///
    /// # Errors
    /// Returns [`KinematicsError::InvalidMass`] unless `mass` is finite and > 0;
    /// the current mass is kept in that case.
    pub fn set_mass(&mut self, mass: f64) -> Result<(), KinematicsError> {
        self.mass = Kilograms::new(mass).ok_or(KinematicsError::InvalidMass(mass))?;
        Ok(())
    }

    /// Advance the position by one whole velocity step
    pub fn move_position(&mut self) {
        self.position = self.position.add_vector(&self.velocity);
    }

    /// Advance the position by `velocity · dt`
    pub fn move_position_for(&mut self, dt: Seconds) {
        self.position = self.position.add_vector(&self.velocity.scale_uniform(*dt));
    }

    /// Add a velocity change
    pub fn update_velocity(&mut self, velocity_change: &Vector) {
        self.velocity = self.velocity.add_vector(velocity_change);
    }

    /// Acceleration produced by `force` acting on this object (a = F / m)
    pub fn acceleration_from_force(&self, force: &Vector) -> Vector {
        force.scale_uniform(self.mass.inverse())
    }
}

impl fmt::Display for PhysicalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mass: {}\nPosition: {}\nVelocity: {}",
            *self.mass, self.position, self.velocity
        )
    }
}

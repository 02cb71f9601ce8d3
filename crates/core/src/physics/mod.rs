//! Kinematics layer built on the vector/point algebra

pub mod body;

pub use body::{KinematicsError, PhysicalObject};

/// Standard gravitational acceleration (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

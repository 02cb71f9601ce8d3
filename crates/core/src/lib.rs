//! Free-Fall Core Library
//!
//! A small 3D vector/point algebra with a toy rigid-body kinematics loop on top.
//!
//! ## Layers
//!
//! - [`core_types`]: [`Vector`] and [`Point`], the closed algebra they form
//!   (addition, scaling, dot/cross products, projection, linear transform,
//!   rotation) and validated unit types
//! - [`physics`]: [`PhysicalObject`], a point mass that moves by its velocity
//!   and turns forces into accelerations
//! - [`simulation`]: [`FreeFallSimulation`], an explicit-Euler loop that runs
//!   until the object's height crosses zero

// Core types and utilities
pub mod core_types;

// Kinematics built on the algebra
pub mod physics;
pub mod simulation;

// Re-export core types
pub use core_types::{CollisionZone, GeometryError, Point, TransformMatrix, Vector};

// Re-export kinematics types
pub use physics::{KinematicsError, PhysicalObject};
pub use simulation::{
    ConfigError, FreeFallSimulation, SimulationConfig, SimulationError, Trajectory,
};

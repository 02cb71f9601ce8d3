//! Core types: the vector/point algebra and the unit types built on it

pub mod error;
pub mod matrix;
pub mod point;
pub mod units;
pub mod vector;

pub use error::GeometryError;
pub use matrix::{rotation_matrix, TransformMatrix};
pub use point::{CollisionZone, Point};
pub use units::{Kilograms, Seconds};
pub use vector::Vector;

//! Fixed locations in 3D space
//!
//! A [`Point`] is displaced by a [`Vector`] to give another point, and two points
//! differ by a vector. Apart from [`Point::set_coordinates`] points behave as
//! plain values.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::error::GeometryError;
use super::vector::{Rounded, Vector};

/// Extents of the box reserved around a point for collision geometry
///
/// No algebra operation reads these; they are carried so a collision layer can
/// be built on top later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct CollisionZone {
    width: f64,
    height: f64,
    depth: f64,
}

impl CollisionZone {
    /// Create a collision zone
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidExtent`] if any extent is negative or not
    /// finite.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, GeometryError> {
        for (dimension, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidExtent { dimension, value });
            }
        }
        Ok(CollisionZone {
            width,
            height,
            depth,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }
}

impl Default for CollisionZone {
    /// Unit cube
    fn default() -> Self {
        CollisionZone {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

impl TryFrom<[f64; 3]> for CollisionZone {
    type Error = GeometryError;

    fn try_from([width, height, depth]: [f64; 3]) -> Result<Self, GeometryError> {
        CollisionZone::new(width, height, depth)
    }
}

impl From<CollisionZone> for [f64; 3] {
    fn from(zone: CollisionZone) -> [f64; 3] {
        [zone.width, zone.height, zone.depth]
    }
}

/// Position in cartesian coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    collision_zone: CollisionZone,
}

impl Point {
    /// The origin, with a unit collision zone
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        collision_zone: CollisionZone {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        },
    };

    /// Create a point with the default unit collision zone
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_collision_zone(x, y, z, CollisionZone::default())
    }

    /// Create a point with explicit collision extents
    #[inline]
    #[must_use]
    pub fn with_collision_zone(x: f64, y: f64, z: f64, collision_zone: CollisionZone) -> Self {
        Point {
            x,
            y,
            z,
            collision_zone,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Coordinates as an `(x, y, z)` tuple
    #[inline]
    pub fn xyz(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    pub fn collision_zone(&self) -> CollisionZone {
        self.collision_zone
    }

    /// Displacement from `origin` to `self`, i.e. `self - origin`
    ///
    /// For point P and origin O this is the vector OP.
    #[must_use]
    pub fn vector_from(&self, origin: &Point) -> Vector {
        Vector::new(self.x - origin.x, self.y - origin.y, self.z - origin.z)
    }

    /// Point reached by moving `self` along `displacement`
    ///
    /// The result keeps this point's collision zone.
    #[must_use]
    pub fn add_vector(&self, displacement: &Vector) -> Point {
        Point::with_collision_zone(
            self.x + displacement.i(),
            self.y + displacement.j(),
            self.z + displacement.k(),
            self.collision_zone,
        )
    }

    /// Point reached by moving `self` against `displacement`
    #[must_use]
    pub fn subtract_vector(&self, displacement: &Vector) -> Point {
        Point::with_collision_zone(
            self.x - displacement.i(),
            self.y - displacement.j(),
            self.z - displacement.k(),
            self.collision_zone,
        )
    }

    /// Replace all three coordinates in place
    pub fn set_coordinates(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::ORIGIN
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        self.add_vector(&rhs)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        self.subtract_vector(&rhs)
    }
}

// Point - Point = displacement between them
impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        self.vector_from(&rhs)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.collision_zone == other.collision_zone
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.collision_zone == other.collision_zone
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            Rounded(self.x),
            Rounded(self.y),
            Rounded(self.z)
        )
    }
}

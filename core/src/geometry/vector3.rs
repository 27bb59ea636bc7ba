//! 3-D Vectors and Points

use crate::common::*;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// A 3-D vector containing `Float` values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3f {
    /// X-coordinate.
    pub x: Float,

    /// Y-coordinate.
    pub y: Float,

    /// Z-coordinate.
    pub z: Float,
}

/// A 3-D point containing `Float` values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3f {
    /// X-coordinate.
    pub x: Float,

    /// Y-coordinate.
    pub y: Float,

    /// Z-coordinate.
    pub z: Float,
}

impl Vector3f {
    /// Zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Returns the vector's length.
    pub fn length(&self) -> Float {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit vector. A zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let l = self.length();
        if l == 0.0 {
            *self
        } else {
            *self * (1.0 / l)
        }
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Point3f {
    /// Origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Creates a new 3-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
}

impl Add<Vector3f> for Point3f {
    type Output = Point3f;

    /// Offsets the point by a vector.
    fn add(self, v: Vector3f) -> Self::Output {
        Point3f::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub for Point3f {
    type Output = Vector3f;

    /// Returns the vector between two points.
    fn sub(self, other: Point3f) -> Self::Output {
        Vector3f::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add for Vector3f {
    type Output = Vector3f;

    fn add(self, v: Vector3f) -> Self::Output {
        Vector3f::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Mul<Float> for Vector3f {
    type Output = Vector3f;

    fn mul(self, f: Float) -> Self::Output {
        Vector3f::new(self.x * f, self.y * f, self.z * f)
    }
}

impl Neg for Vector3f {
    type Output = Vector3f;

    fn neg(self) -> Self::Output {
        Vector3f::new(-self.x, -self.y, -self.z)
    }
}

impl Index<usize> for Point3f {
    type Output = Float;

    /// Index the point by an axis to get the immutable coordinate axis value.
    ///
    /// * `axis` - A 3-D coordinate axis (0, 1 or 2).
    fn index(&self, axis: usize) -> &Self::Output {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid axis for Point3f"),
        }
    }
}

impl From<[Float; 3]> for Vector3f {
    fn from(v: [Float; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<[Float; 3]> for Point3f {
    fn from(v: [Float; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Point3f> for Vector3f {
    fn from(p: Point3f) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3f> for Point3f {
    fn from(v: Vector3f) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector3f {
    /// Writes the `"x, y, z"` form used by `lookat` attributes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl fmt::Display for Point3f {
    /// Writes the `"x, y, z"` form used by `lookat` attributes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

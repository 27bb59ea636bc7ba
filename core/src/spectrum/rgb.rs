//! RGB Colours

use crate::common::*;
use std::fmt;
use std::ops::Mul;

/// A linear RGB colour as stored by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    /// Red.
    pub r: Float,

    /// Green.
    pub g: Float,

    /// Blue.
    pub b: Float,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new colour.
    ///
    /// * `r` - Red.
    /// * `g` - Green.
    /// * `b` - Blue.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Creates a grey colour.
    ///
    /// * `v` - Value for all channels.
    pub const fn grey(v: Float) -> Self {
        Self::new(v, v, v)
    }
}

impl Mul<Float> for Color {
    type Output = Color;

    /// Scales all channels.
    fn mul(self, s: Float) -> Self::Output {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

impl From<[Float; 3]> for Color {
    fn from(v: [Float; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for Color {
    /// Writes the `"r g b"` form used by `rgb` and `srgb` values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

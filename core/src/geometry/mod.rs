//! Geometry

mod bounds3;
mod matrix4x4;
mod vector3;

// Re-export
pub use bounds3::*;
pub use matrix4x4::*;
pub use vector3::*;

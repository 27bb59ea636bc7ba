//! Participating Media

#[macro_use]
extern crate log;

mod grid;
mod heterogeneous;
mod homogeneous;
mod phase;
mod scattering;

// Re-export
pub use grid::*;
pub use heterogeneous::*;
pub use homogeneous::*;
pub use phase::*;
pub use scattering::*;

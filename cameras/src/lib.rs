//! Camera

#[macro_use]
extern crate log;

mod sensor;
mod transform;

// Re-export
pub use sensor::*;
pub use transform::*;

//! Samplers

#[macro_use]
extern crate log;

mod sampler;

// Re-export.
pub use sampler::*;

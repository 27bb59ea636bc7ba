//! Integrators

#[macro_use]
extern crate log;

mod bdpt;
mod common;
mod direct_lighting;
mod meta;
mod mlt;
mod multichannel;
mod path;
mod sppm;

// Re-export.
pub use bdpt::*;
pub use common::*;
pub use direct_lighting::*;
pub use meta::*;
pub use mlt::*;
pub use multichannel::*;
pub use path::*;
pub use sppm::*;

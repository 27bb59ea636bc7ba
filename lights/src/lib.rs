//! Lights

#[macro_use]
extern crate log;

mod common;
mod distant;
mod infinite;
mod point;
mod spot;
mod sunsky;

// Re-export
pub use common::*;
pub use distant::*;
pub use infinite::*;
pub use point::*;
pub use spot::*;
pub use sunsky::*;

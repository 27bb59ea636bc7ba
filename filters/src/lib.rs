//! Filters

#[macro_use]
extern crate log;

mod rfilter;

// Re-export.
pub use rfilter::*;

//! Core

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

// Re-export.
pub mod common;
pub mod context;
pub mod element;
pub mod fileutil;
pub mod film;
pub mod float_file;
pub mod geometry;
pub mod host;
pub mod paramset;
pub mod presets;
pub mod settings;
pub mod spectrum;
pub mod texture;

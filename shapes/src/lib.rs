//! Geometry

#[macro_use]
extern crate log;

mod objmesh;

// Re-export
pub use objmesh::*;

//! The API

#[macro_use]
extern crate log;
#[macro_use]
extern crate pest_derive;

mod frame;
mod material_cache;
mod render_data;
mod scene;

pub mod parser;

// Re-export
pub use frame::*;
pub use material_cache::*;
pub use render_data::*;
pub use scene::*;

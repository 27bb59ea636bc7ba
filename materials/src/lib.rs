//! Materials

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod area_light;
mod coating;
mod common;
mod composite;
mod conductor;
mod dielectric;
mod diffuse;
mod glossy;
mod hk;
mod medium;
mod mix;
mod plastic;
mod subsurface;

// Re-export
pub use area_light::*;
pub use coating::*;
pub use common::*;
pub use composite::*;
pub use conductor::*;
pub use dielectric::*;
pub use diffuse::*;
pub use glossy::*;
pub use hk::*;
pub use medium::*;
pub use mix::*;
pub use plastic::*;
pub use subsurface::*;

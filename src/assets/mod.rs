//! Assets module - holdings and their derived per-position figures.

mod assets_model;


pub use assets_model::{Asset, AssetKind};

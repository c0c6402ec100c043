pub mod base;
pub mod image;
pub mod macros;

pub use base::{LayerProperties, LayerTrait, LayerType, TileRequest};
pub use image::ImageLayer;

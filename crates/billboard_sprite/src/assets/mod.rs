//! Asset types consumed by the sprite pipeline
//!
//! Textures reach the pipeline decoded; loading and decoding belong to the host.

pub mod image_data;
pub mod texture;

pub use image_data::ImageData;
pub use texture::{Texture, TextureRef};

//! Sprite frame textures

use std::sync::Arc;

use super::ImageData;
use crate::foundation::math::{PixelRect, Vec2};

/// Shared handle to a texture
///
/// Collections own their frames through these handles; materials and
/// timelines hold clones, never copies of the pixels.
pub type TextureRef = Arc<Texture>;

/// A named, decoded frame texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Asset name, used in diagnostics
    pub name: String,
    /// Decoded pixels
    pub image: ImageData,
}

impl Texture {
    /// Create a texture from decoded pixels
    pub fn new(name: impl Into<String>, image: ImageData) -> Self {
        Self { name: name.into(), image }
    }

    /// Create a solid color texture
    pub fn solid(name: impl Into<String>, width: u32, height: u32, color: [u8; 4]) -> Self {
        Self::new(name, ImageData::solid_color(width, height, color))
    }

    /// Pixel dimensions
    pub fn size(&self) -> Vec2 {
        self.image.size()
    }

    /// Bounding rectangle of the non-transparent pixels
    pub fn opaque_extent(&self) -> PixelRect {
        self.image.opaque_extent()
    }
}

//! Decoded image data for sprite frames
//!
//! Pixels arrive already decoded as RGBA8; this module only answers
//! questions about them.

use crate::foundation::math::{PixelRect, Vec2};

/// Decoded RGBA pixel buffer
///
/// The buffer always holds exactly `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Number of color channels
    pub const CHANNELS: usize = 4;

    /// Wrap an RGBA8 buffer
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            log::warn!(
                "RGBA buffer holds {} bytes, {}x{} needs {}",
                data.len(), width, height, expected
            );
            return None;
        }
        Some(Self { data, width, height })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        Self {
            data: color.repeat(pixel_count),
            width,
            height,
        }
    }

    /// Raw RGBA pixel data, row major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Image dimensions as a float vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * Self::CHANNELS)
    }

    /// Alpha value of a pixel, `None` outside the image
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel_offset(x, y).map(|start| self.data[start + 3])
    }

    /// Overwrite one pixel
    ///
    /// Coordinates outside the image are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        match self.pixel_offset(x, y) {
            Some(start) => self.data[start..start + Self::CHANNELS].copy_from_slice(&color),
            None => log::warn!("Pixel ({x}, {y}) outside {}x{} image", self.width, self.height),
        }
    }

    /// Smallest rectangle enclosing every pixel with non-zero alpha
    ///
    /// A fully transparent image yields an empty rectangle at the origin.
    // Frames are at most a few thousand pixels across
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn opaque_extent(&self) -> PixelRect {
        if self.width == 0 {
            return PixelRect::default();
        }

        let mut min = (u32::MAX, u32::MAX);
        let mut max = (0u32, 0u32);
        let mut found = false;

        for (i, pixel) in self.data.chunks_exact(Self::CHANNELS).enumerate() {
            if pixel[3] == 0 {
                continue;
            }
            let x = (i % self.width as usize) as u32;
            let y = (i / self.width as usize) as u32;
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
            found = true;
        }

        if !found {
            return PixelRect::default();
        }

        PixelRect::new(
            min.0 as i32,
            min.1 as i32,
            (max.0 - min.0 + 1) as i32,
            (max.1 - min.1 + 1) as i32,
        )
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

//! Math utilities and types
//!
//! Provides the vector types shared by geometry, material and collision code,
//! plus an integer rectangle for pixel-space queries.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Axis-aligned rectangle in pixel space
///
/// `x`/`y` address the top-left pixel, `width`/`height` count pixels.
/// An empty rectangle has zero width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl PixelRect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Absolute size as a float vector
    pub fn abs_size(&self) -> Vec2 {
        Vec2::new(self.width.unsigned_abs() as f32, self.height.unsigned_abs() as f32)
    }

    /// True when the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for PixelRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[P: ({}, {}), S: ({}, {})]", self.x, self.y, self.width, self.height)
    }
}

//! Collision shape descriptors

use crate::foundation::math::Vec3;

/// Axis-aligned box in model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    /// Full extents (width, height, depth) in world units
    pub size: Vec3,
}

impl BoxShape {
    /// Create a box from its full extents
    pub const fn new(size: Vec3) -> Self {
        Self { size }
    }

    /// Half extents, as most physics backends expect
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        self.size.x * self.size.y * self.size.z
    }
}

/// Collision shape types (stored in MODEL SPACE)
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// Box collision volume
    Box(BoxShape),
}

impl CollisionShape {
    /// Creates a box collision shape from width, height and depth
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box(BoxShape::new(Vec3::new(width, height, depth)))
    }

    /// Full extents of the shape's bounding box
    pub fn size(&self) -> Vec3 {
        match self {
            Self::Box(shape) => shape.size,
        }
    }

    /// Radius of the sphere enclosing the shape
    pub fn local_bounding_radius(&self) -> f32 {
        match self {
            Self::Box(shape) => shape.half_extents().magnitude(),
        }
    }
}

//! Quad geometry for sprites
//!
//! A sprite quad lies in the local XY plane, centered on the origin and
//! facing +Z. Billboarding is applied by the material at draw time, so the
//! geometry itself never rotates.

use bytemuck::{Pod, Zeroable};

use super::SpriteMaterial;
use crate::foundation::math::Vec2;

/// Vertex data structure with position, normal and texture coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Normal vector
    pub normal: [f32; 3],
    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self { position, normal, tex_coord }
    }
}

/// Flat textured quad with its material
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMesh {
    /// Size in world units (width, height)
    pub size: Vec2,
    /// Material drawn on the quad
    pub material: SpriteMaterial,
    /// Corners: bottom-left, bottom-right, top-right, top-left
    pub vertices: [Vertex; 4],
    /// Two counter-clockwise triangles
    pub indices: [u32; 6],
}

impl QuadMesh {
    /// Build a quad of the given world size
    pub fn new(size: Vec2, material: SpriteMaterial) -> Self {
        let hx = size.x * 0.5;
        let hy = size.y * 0.5;
        let normal = [0.0, 0.0, 1.0];

        // Texture rows run top-down, so v = 0 sits at the top edge
        let vertices = [
            Vertex::new([-hx, -hy, 0.0], normal, [0.0, 1.0]),
            Vertex::new([hx, -hy, 0.0], normal, [1.0, 1.0]),
            Vertex::new([hx, hy, 0.0], normal, [1.0, 0.0]),
            Vertex::new([-hx, hy, 0.0], normal, [0.0, 0.0]),
        ];

        Self {
            size,
            material,
            vertices,
            indices: [0, 1, 2, 2, 3, 0],
        }
    }

    /// Vertex data as raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Texture;
    use crate::render::{BillboardMode, TextureFilter};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn material() -> SpriteMaterial {
        let albedo = Arc::new(Texture::solid("a", 4, 4, [255; 4]));
        SpriteMaterial::new(albedo, BillboardMode::Enabled, TextureFilter::Nearest)
    }

    #[test]
    fn test_quad_corners_match_size() {
        let quad = QuadMesh::new(Vec2::new(2.0, 1.0), material());

        assert_relative_eq!(quad.vertices[0].position[0], -1.0);
        assert_relative_eq!(quad.vertices[0].position[1], -0.5);
        assert_relative_eq!(quad.vertices[2].position[0], 1.0);
        assert_relative_eq!(quad.vertices[2].position[1], 0.5);
        assert_eq!(quad.vertices[3].tex_coord, [0.0, 0.0]);
    }

    #[test]
    fn test_upload_bytes() {
        let quad = QuadMesh::new(Vec2::new(1.0, 1.0), material());
        assert_eq!(quad.vertex_bytes().len(), 4 * std::mem::size_of::<Vertex>());
        assert_eq!(quad.index_bytes().len(), 6 * 4);
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }
}

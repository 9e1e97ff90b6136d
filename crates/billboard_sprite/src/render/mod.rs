//! # Rendering descriptors
//!
//! Backend-agnostic descriptions of what a sprite draws: one quad and one
//! material. The host renderer consumes them through
//! [`MeshSink`](crate::sprite::MeshSink).

pub mod material;
pub mod mesh;

pub use material::{
    BillboardMode, TextureFilter, Transparency, CullMode,
    MaterialChannel, MaterialFeatures, SpriteMaterial,
};
pub use mesh::{QuadMesh, Vertex};

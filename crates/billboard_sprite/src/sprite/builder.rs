//! Artifact builders
//!
//! Turns a validated collection into the quad, the frame timeline and the
//! collision box. Quad and box both divide pixel sizes by the same
//! pixels-per-world-unit value; using different values would misalign the
//! visible sprite and its collider.

use super::validator::ValidatedCollection;
use crate::animation::{FrameAssignment, FrameTimeline};
use crate::assets::TextureRef;
use crate::config::SpriteConfig;
use crate::physics::collision::CollisionShape;
use crate::render::{QuadMesh, SpriteMaterial};

/// Everything a rebuild publishes, built before anything is published
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteArtifacts {
    /// Quad with material
    pub mesh: QuadMesh,
    /// Frame timeline, `None` for single-frame collections
    pub timeline: Option<FrameTimeline>,
    /// Collision box
    pub collision: CollisionShape,
}

impl SpriteArtifacts {
    /// Build all artifacts for a validated collection
    pub fn build(validated: &ValidatedCollection<'_>, config: &SpriteConfig, pixels_per_world_unit: f32) -> Self {
        Self {
            mesh: build_material_and_mesh(validated, pixels_per_world_unit),
            timeline: build_timeline(validated),
            collision: derive_collision_bounds(
                validated,
                pixels_per_world_unit,
                config.collision_depth,
                config.min_collision_extent,
            ),
        }
    }
}

/// Build the sprite quad and its material
///
/// Each channel shows the first frame of its layer; the timeline swaps
/// them afterwards.
pub fn build_material_and_mesh(validated: &ValidatedCollection<'_>, pixels_per_world_unit: f32) -> QuadMesh {
    let collection = validated.collection();

    let mut material = SpriteMaterial::new(
        collection.primary_frames[0].clone(),
        collection.billboard,
        collection.texture_filter,
    );
    if let Some(normal) = collection.normal_frames.as_ref().and_then(|frames| frames.first()) {
        material = material.with_normal(normal.clone());
    }
    if let Some(occlusion) = collection.occlusion_frames.as_ref().and_then(|frames| frames.first()) {
        material = material.with_ambient_occlusion(occlusion.clone());
    }

    QuadMesh::new(validated.frame_size() / pixels_per_world_unit, material)
}

/// Build the frame timeline
///
/// Returns `None` for single-frame collections, which stay static. Normal
/// and occlusion layers shorter than the albedo layer hold their last frame.
pub fn build_timeline(validated: &ValidatedCollection<'_>) -> Option<FrameTimeline> {
    let collection = validated.collection();
    if collection.frame_count() <= 1 {
        return None;
    }

    let frames = collection
        .primary_frames
        .iter()
        .enumerate()
        .map(|(i, albedo)| FrameAssignment {
            albedo: albedo.clone(),
            normal: clamped_frame(collection.normal_frames.as_deref(), i),
            ambient_occlusion: clamped_frame(collection.occlusion_frames.as_deref(), i),
        })
        .collect();

    Some(FrameTimeline::new(frames, collection.animation_speed_scale))
}

fn clamped_frame(frames: Option<&[TextureRef]>, index: usize) -> Option<TextureRef> {
    let frames = frames?;
    frames.get(index).or_else(|| frames.last()).cloned()
}

/// Derive the collision box from the opaque pixels of the first albedo frame
///
/// A fully transparent frame has no opaque extent; its width and height are
/// clamped to `min_extent` so the collider never collapses to zero volume.
pub fn derive_collision_bounds(
    validated: &ValidatedCollection<'_>,
    pixels_per_world_unit: f32,
    depth: f32,
    min_extent: f32,
) -> CollisionShape {
    let collection = validated.collection();
    let rect = collection.primary_frames[0].opaque_extent();
    log::debug!("Collision shape rect for '{}': {}", collection.name, rect);

    if rect.is_empty() {
        log::warn!(
            "Collection '{}': first albedo frame has no opaque pixels, clamping collider to {}",
            collection.name, min_extent
        );
    }

    let size = rect.abs_size() / pixels_per_world_unit;
    CollisionShape::cuboid(size.x.max(min_extent), size.y.max(min_extent), depth)
}

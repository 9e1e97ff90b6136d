//! Frame size validation
//!
//! Every frame of every layer must match the size of the first albedo frame.
//! Sizes compare with a small tolerance rather than bit-exactly. The playback
//! speed must also be a positive number.

use approx::abs_diff_eq;

use super::collection::{LayerKind, SpriteCollection};
use crate::foundation::math::Vec2;
use crate::SpriteError;

/// A collection whose layers passed size validation
///
/// Only [`validate`] creates these, so the builders never see a collection
/// with mismatched frames.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedCollection<'a> {
    collection: &'a SpriteCollection,
    frame_size: Vec2,
}

impl<'a> ValidatedCollection<'a> {
    /// The validated collection
    pub const fn collection(&self) -> &'a SpriteCollection {
        self.collection
    }

    /// Pixel size shared by all frames
    pub const fn frame_size(&self) -> Vec2 {
        self.frame_size
    }
}

/// Check frame sizes within and across layers, and the playback speed
pub fn validate(collection: &SpriteCollection, epsilon: f32) -> Result<ValidatedCollection<'_>, SpriteError> {
    let first = collection.primary_frames.first().ok_or_else(|| SpriteError::EmptyPrimary {
        collection: collection.name.clone(),
    })?;
    let reference = first.size();

    let speed_scale = collection.animation_speed_scale;
    if !(speed_scale.is_finite() && speed_scale > 0.0) {
        return Err(SpriteError::InvalidSpeedScale {
            collection: collection.name.clone(),
            speed_scale,
        });
    }

    for kind in [LayerKind::Primary, LayerKind::Normal, LayerKind::Occlusion] {
        let frames = collection.layer(kind);
        if let Some((frame, texture)) = frames
            .iter()
            .enumerate()
            .find(|(_, texture)| !abs_diff_eq!(texture.size(), reference, epsilon = epsilon))
        {
            return Err(SpriteError::SizeMismatch {
                collection: collection.name.clone(),
                layer: kind,
                frame,
                expected: reference,
                found: texture.size(),
            });
        }

        if frames.len() > collection.primary_frames.len() {
            log::warn!(
                "Collection '{}': {} layer has {} frames but only {} albedo frames, extra frames are unused",
                collection.name,
                kind,
                frames.len(),
                collection.primary_frames.len()
            );
        }
    }

    Ok(ValidatedCollection {
        collection,
        frame_size: reference,
    })
}

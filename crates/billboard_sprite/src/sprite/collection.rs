//! Sprite collections and the catalog that offers them
//!
//! A collection is an immutable bundle of up to three parallel frame layers
//! plus the rendering parameters applied when it is shown. The catalog owns
//! collections for the lifetime of the host; sprite entities only hold
//! shared references.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::assets::TextureRef;
use crate::render::{BillboardMode, TextureFilter};
use crate::SpriteError;

/// One of the parallel frame layers of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Albedo frames, drives frame count and size
    Primary,
    /// Normal map frames
    Normal,
    /// Ambient occlusion frames
    Occlusion,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "albedo",
            Self::Normal => "normal",
            Self::Occlusion => "occlusion",
        };
        f.write_str(name)
    }
}

/// Animated set of texture layers
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCollection {
    /// Name, unique within a catalog
    pub name: String,
    /// Albedo frames
    pub primary_frames: Vec<TextureRef>,
    /// Normal frames, `None` when the collection has no normal layer
    pub normal_frames: Option<Vec<TextureRef>>,
    /// Occlusion frames, `None` when the collection has no occlusion layer
    pub occlusion_frames: Option<Vec<TextureRef>>,
    /// Camera facing mode
    pub billboard: BillboardMode,
    /// Sampling mode
    pub texture_filter: TextureFilter,
    /// Playback speed multiplier
    pub animation_speed_scale: f32,
}

impl SpriteCollection {
    /// Default playback speed multiplier
    pub const DEFAULT_SPEED_SCALE: f32 = 5.0;

    /// Create a collection with only albedo frames and default parameters
    pub fn new<I, T>(name: impl Into<String>, primary_frames: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextureRef>,
    {
        Self {
            name: name.into(),
            primary_frames: primary_frames.into_iter().map(Into::into).collect(),
            normal_frames: None,
            occlusion_frames: None,
            billboard: BillboardMode::default(),
            texture_filter: TextureFilter::default(),
            animation_speed_scale: Self::DEFAULT_SPEED_SCALE,
        }
    }

    /// Attach a normal layer
    ///
    /// An empty layer is the same as no layer.
    #[must_use]
    pub fn with_normal_frames<I, T>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextureRef>,
    {
        self.normal_frames = non_empty(frames);
        self
    }

    /// Attach an occlusion layer
    ///
    /// An empty layer is the same as no layer.
    #[must_use]
    pub fn with_occlusion_frames<I, T>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextureRef>,
    {
        self.occlusion_frames = non_empty(frames);
        self
    }

    /// Set the billboard mode
    #[must_use]
    pub fn with_billboard(mut self, billboard: BillboardMode) -> Self {
        self.billboard = billboard;
        self
    }

    /// Set the texture filter
    #[must_use]
    pub fn with_texture_filter(mut self, filter: TextureFilter) -> Self {
        self.texture_filter = filter;
        self
    }

    /// Set the playback speed multiplier
    #[must_use]
    pub fn with_speed_scale(mut self, speed_scale: f32) -> Self {
        self.animation_speed_scale = speed_scale;
        self
    }

    /// Frames of a layer; missing layers read as empty
    pub fn layer(&self, kind: LayerKind) -> &[TextureRef] {
        match kind {
            LayerKind::Primary => &self.primary_frames,
            LayerKind::Normal => self.normal_frames.as_deref().unwrap_or_default(),
            LayerKind::Occlusion => self.occlusion_frames.as_deref().unwrap_or_default(),
        }
    }

    /// Number of albedo frames
    pub fn frame_count(&self) -> usize {
        self.primary_frames.len()
    }
}

fn non_empty<I, T>(frames: I) -> Option<Vec<TextureRef>>
where
    I: IntoIterator<Item = T>,
    T: Into<TextureRef>,
{
    let frames: Vec<TextureRef> = frames.into_iter().map(Into::into).collect();
    (!frames.is_empty()).then_some(frames)
}

/// Source of sprite collections
///
/// Implementations are read-only after construction and may be shared by
/// many sprite entities.
pub trait TextureLayerProvider {
    /// Collections in selection order
    fn collections(&self) -> &[Arc<SpriteCollection>];

    /// Texture pixels per world unit
    fn pixels_per_world_unit(&self) -> f32;

    /// Number of collections offered
    fn count(&self) -> usize {
        self.collections().len()
    }

    /// Collection at an index
    fn get(&self, index: usize) -> Option<&Arc<SpriteCollection>> {
        self.collections().get(index)
    }
}

/// Static catalog of collections with unique names
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    collections: Vec<Arc<SpriteCollection>>,
    pixels_per_world_unit: f32,
}

impl SpriteCatalog {
    /// Build a catalog, rejecting duplicate names and a non-positive scale
    pub fn new(
        collections: impl IntoIterator<Item = SpriteCollection>,
        pixels_per_world_unit: f32,
    ) -> Result<Self, SpriteError> {
        let pixels_per_world_unit = checked_pixels_per_world_unit(pixels_per_world_unit)?;

        let mut seen = HashSet::new();
        let mut stored = Vec::new();
        for collection in collections {
            if !seen.insert(collection.name.clone()) {
                return Err(SpriteError::DuplicateCollection(collection.name));
            }
            stored.push(Arc::new(collection));
        }

        log::debug!("Sprite catalog holds {} collections", stored.len());

        Ok(Self {
            collections: stored,
            pixels_per_world_unit,
        })
    }

    /// Wrap the catalog for sharing across sprite entities
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Index of the collection with the given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.collections.iter().position(|c| c.name == name)
    }
}

/// Reject a zero, negative or non-finite world scale
pub(crate) fn checked_pixels_per_world_unit(value: f32) -> Result<f32, SpriteError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SpriteError::InvalidPixelsPerUnit(value))
    }
}

impl TextureLayerProvider for SpriteCatalog {
    fn collections(&self) -> &[Arc<SpriteCollection>] {
        &self.collections
    }

    fn pixels_per_world_unit(&self) -> f32 {
        self.pixels_per_world_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Texture;

    fn frame(name: &str) -> Texture {
        Texture::solid(name, 8, 8, [255; 4])
    }

    #[test]
    fn test_collection_defaults() {
        let collection = SpriteCollection::new("idle", vec![frame("a")]);

        assert_eq!(collection.billboard, BillboardMode::Enabled);
        assert_eq!(collection.texture_filter, TextureFilter::NearestWithMipmapsAnisotropic);
        assert_eq!(collection.animation_speed_scale, 5.0);
        assert!(collection.normal_frames.is_none());
        assert!(collection.layer(LayerKind::Occlusion).is_empty());
    }

    #[test]
    fn test_empty_secondary_layer_is_absent() {
        let collection = SpriteCollection::new("idle", vec![frame("a")])
            .with_normal_frames(Vec::<Texture>::new())
            .with_occlusion_frames(vec![frame("o")]);

        assert!(collection.normal_frames.is_none());
        assert_eq!(collection.layer(LayerKind::Occlusion).len(), 1);
    }

    #[test]
    fn test_catalog_rejects_duplicate_names() {
        let result = SpriteCatalog::new(
            vec![
                SpriteCollection::new("walk", vec![frame("a")]),
                SpriteCollection::new("walk", vec![frame("b")]),
            ],
            32.0,
        );
        assert!(matches!(result, Err(SpriteError::DuplicateCollection(name)) if name == "walk"));
    }

    #[test]
    fn test_catalog_rejects_bad_scale() {
        for ppu in [0.0, -32.0, f32::NAN, f32::INFINITY] {
            let result = SpriteCatalog::new(vec![SpriteCollection::new("idle", vec![frame("a")])], ppu);
            assert!(matches!(result, Err(SpriteError::InvalidPixelsPerUnit(_))), "accepted {ppu}");
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = SpriteCatalog::new(
            vec![
                SpriteCollection::new("idle", vec![frame("a")]),
                SpriteCollection::new("walk", vec![frame("b")]),
            ],
            16.0,
        )
        .unwrap();

        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.index_of("walk"), Some(1));
        assert_eq!(catalog.get(0).map(|c| c.name.as_str()), Some("idle"));
        assert!(catalog.get(2).is_none());
        assert_eq!(catalog.pixels_per_world_unit(), 16.0);
    }
}

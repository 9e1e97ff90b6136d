//! Sprite pipeline errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::foundation::math::Vec2;
use crate::sprite::LayerKind;

/// Sprite pipeline errors
///
/// None of these are fatal: a failed rebuild leaves the last valid sprite
/// on screen.
#[derive(Error, Debug)]
pub enum SpriteError {
    /// The collection has no albedo frames
    #[error("Collection '{collection}' has no albedo textures")]
    EmptyPrimary {
        /// Collection name
        collection: String,
    },

    /// A frame's size differs from the first albedo frame
    #[error(
        "Collection '{collection}': {layer} frame {frame} is {}x{}, expected {}x{}",
        .found.x, .found.y, .expected.x, .expected.y
    )]
    SizeMismatch {
        /// Collection name
        collection: String,
        /// Layer holding the offending frame
        layer: LayerKind,
        /// Frame index within the layer
        frame: usize,
        /// Size of the first albedo frame
        expected: Vec2,
        /// Size of the offending frame
        found: Vec2,
    },

    /// The collection's playback speed is not a positive number
    #[error("Collection '{collection}' has invalid animation speed scale {speed_scale}")]
    InvalidSpeedScale {
        /// Collection name
        collection: String,
        /// Offending speed multiplier
        speed_scale: f32,
    },

    /// Switch requested to a collection outside the catalog
    #[error("Invalid sprite collection index: {index} (catalog holds {count})")]
    InvalidIndex {
        /// Requested index
        index: usize,
        /// Number of collections offered
        count: usize,
    },

    /// A required sink or provider was not supplied
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The pixels-per-world-unit scale is not a positive number
    #[error("Pixels per world unit must be positive, got {0}")]
    InvalidPixelsPerUnit(f32),

    /// The provider and the sprite settings disagree on the world scale
    #[error("Provider uses {provided} pixels per world unit, config expects {configured}")]
    ScaleMismatch {
        /// Value from the sprite settings
        configured: f32,
        /// Value from the texture-layer provider
        provided: f32,
    },

    /// Two collections share a name
    #[error("Duplicate sprite collection name: {0}")]
    DuplicateCollection(String),

    /// The catalog offers no collections
    #[error("No sprite collections provided")]
    EmptyCatalog,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SpriteError {
    /// True for asset data problems (bad frame sets)
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPrimary { .. } | Self::SizeMismatch { .. } | Self::InvalidSpeedScale { .. }
        )
    }

    /// True for caller mistakes that indicate a programming error
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidIndex { .. }
                | Self::MissingCollaborator(_)
                | Self::InvalidPixelsPerUnit(_)
                | Self::ScaleMismatch { .. }
        )
    }
}

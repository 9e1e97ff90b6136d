//! Configuration system
//!
//! Sprite settings load from TOML or RON files, picked by file extension.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Sprite pipeline settings shared by every sprite entity
///
/// `pixels_per_world_unit` drives both the quad size and the collision box;
/// the two stay aligned only because they read the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Texture pixels per world unit
    pub pixels_per_world_unit: f32,
    /// Depth of the collision box in world units
    pub collision_depth: f32,
    /// Smallest collision width/height, used for fully transparent frames
    pub min_collision_extent: f32,
    /// Tolerance when comparing frame sizes in pixels
    pub size_epsilon: f32,
    /// Node name used to build animation track paths
    pub mesh_node_name: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            pixels_per_world_unit: 32.0,
            collision_depth: 0.8,
            min_collision_extent: 0.001,
            size_epsilon: 1.0e-4,
            mesh_node_name: "SpriteMesh".to_string(),
        }
    }
}

impl Config for SpriteConfig {}

impl SpriteConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("pixels_per_world_unit", self.pixels_per_world_unit),
            ("collision_depth", self.collision_depth),
            ("min_collision_extent", self.min_collision_extent),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.size_epsilon.is_finite() && self.size_epsilon >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "size_epsilon must not be negative, got {}",
                self.size_epsilon
            )));
        }
        Ok(())
    }
}

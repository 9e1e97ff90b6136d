//! Sprite material descriptor
//!
//! A sprite material is a standard material restricted to three texture
//! channels. Everything else about it is fixed: it alpha-blends with a depth
//! pre-pass so overlapping sprites sort correctly, and it never culls, so
//! the quad stays visible from behind.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::assets::TextureRef;

/// How the quad orients itself towards the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BillboardMode {
    /// Quad keeps its own orientation
    Disabled,
    /// Quad always faces the camera
    #[default]
    Enabled,
    /// Quad rotates around the world Y axis only
    FixedY,
    /// Particle-style billboarding
    Particles,
}

/// Texture sampling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextureFilter {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    Linear,
    /// Nearest neighbor with mipmaps
    NearestWithMipmaps,
    /// Linear with mipmaps
    LinearWithMipmaps,
    /// Nearest neighbor with anisotropic mipmaps (pixel art default)
    #[default]
    NearestWithMipmapsAnisotropic,
    /// Linear with anisotropic mipmaps
    LinearWithMipmapsAnisotropic,
}

/// Transparency handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transparency {
    /// Fully opaque
    Disabled,
    /// Alpha blended, no depth write
    Alpha,
    /// Alpha blended after an opaque depth pre-pass
    AlphaDepthPrePass,
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// Cull back faces
    Back,
    /// Cull front faces
    Front,
    /// Draw both sides
    Disabled,
}

/// Texture channels a sprite material can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialChannel {
    /// Base color
    Albedo,
    /// Normal map
    Normal,
    /// Ambient occlusion
    AmbientOcclusion,
}

impl MaterialChannel {
    /// All channels in track order
    pub const ALL: [Self; 3] = [Self::Albedo, Self::Normal, Self::AmbientOcclusion];

    /// Material property holding this channel's texture
    pub const fn property(self) -> &'static str {
        match self {
            Self::Albedo => "albedo_texture",
            Self::Normal => "normal_texture",
            Self::AmbientOcclusion => "ao_texture",
        }
    }

    /// Property path of this channel on the given mesh node
    pub fn property_path(self, mesh_node: &str) -> String {
        format!("{mesh_node}:mesh:material:{}", self.property())
    }
}

bitflags! {
    /// Optional material features
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MaterialFeatures: u32 {
        /// Normal channel sampled
        const NORMAL = 1 << 0;
        /// Occlusion channel sampled
        const AMBIENT_OCCLUSION = 1 << 1;
    }
}

/// Material applied to a sprite quad
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteMaterial {
    /// Base color texture
    pub albedo_texture: TextureRef,
    /// Normal map, bound when [`MaterialFeatures::NORMAL`] is set
    pub normal_texture: Option<TextureRef>,
    /// Occlusion map, bound when [`MaterialFeatures::AMBIENT_OCCLUSION`] is set
    pub ao_texture: Option<TextureRef>,
    /// Enabled optional features
    pub features: MaterialFeatures,
    /// Camera facing mode
    pub billboard: BillboardMode,
    /// Sampling mode
    pub filter: TextureFilter,
    /// Transparency handling
    pub transparency: Transparency,
    /// Face culling
    pub cull_mode: CullMode,
}

impl SpriteMaterial {
    /// Create a material with only the albedo channel bound
    pub fn new(albedo: TextureRef, billboard: BillboardMode, filter: TextureFilter) -> Self {
        Self {
            albedo_texture: albedo,
            normal_texture: None,
            ao_texture: None,
            features: MaterialFeatures::empty(),
            billboard,
            filter,
            transparency: Transparency::AlphaDepthPrePass,
            cull_mode: CullMode::Disabled,
        }
    }

    /// Bind a normal map and enable the normal feature
    #[must_use]
    pub fn with_normal(mut self, texture: TextureRef) -> Self {
        self.normal_texture = Some(texture);
        self.features |= MaterialFeatures::NORMAL;
        self
    }

    /// Bind an occlusion map and enable the occlusion feature
    #[must_use]
    pub fn with_ambient_occlusion(mut self, texture: TextureRef) -> Self {
        self.ao_texture = Some(texture);
        self.features |= MaterialFeatures::AMBIENT_OCCLUSION;
        self
    }

    /// Texture currently bound to a channel
    pub fn texture(&self, channel: MaterialChannel) -> Option<&TextureRef> {
        match channel {
            MaterialChannel::Albedo => Some(&self.albedo_texture),
            MaterialChannel::Normal => self.normal_texture.as_ref(),
            MaterialChannel::AmbientOcclusion => self.ao_texture.as_ref(),
        }
    }

    /// Check whether the material requires alpha blending
    pub const fn requires_blending(&self) -> bool {
        !matches!(self.transparency, Transparency::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Texture;
    use std::sync::Arc;

    #[test]
    fn test_channel_property_paths() {
        assert_eq!(
            MaterialChannel::Albedo.property_path("SpriteMesh"),
            "SpriteMesh:mesh:material:albedo_texture"
        );
        assert_eq!(MaterialChannel::AmbientOcclusion.property(), "ao_texture");
    }

    #[test]
    fn test_optional_channels_set_features() {
        let albedo = Arc::new(Texture::solid("a", 8, 8, [255; 4]));
        let normal = Arc::new(Texture::solid("n", 8, 8, [128, 128, 255, 255]));

        let material = SpriteMaterial::new(albedo, BillboardMode::Enabled, TextureFilter::Nearest)
            .with_normal(normal.clone());

        assert!(material.features.contains(MaterialFeatures::NORMAL));
        assert!(!material.features.contains(MaterialFeatures::AMBIENT_OCCLUSION));
        assert_eq!(material.texture(MaterialChannel::Normal), Some(&normal));
        assert!(material.texture(MaterialChannel::AmbientOcclusion).is_none());
        assert_eq!(material.cull_mode, CullMode::Disabled);
        assert!(material.requires_blending());
    }
}

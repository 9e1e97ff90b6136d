//! # Billboard Sprite
//!
//! Renders a 2D sprite as a camera-facing quad in a 3D world and keeps its
//! visual frame, material and collision footprint in sync with a selectable
//! sprite collection.
//!
//! ## Pipeline
//!
//! - **Validation**: every frame of every texture layer must share one size
//! - **Material + Mesh**: quad sized from pixel dimensions, layer textures bound
//!   as material channels
//! - **Timeline**: per-frame texture swaps across up to three channels
//! - **Collision**: box derived from the opaque pixels of the first frame
//!
//! The engine backends are reached only through the sink traits in
//! [`sprite::sinks`], so the whole pipeline runs headless.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use billboard_sprite::prelude::*;
//! # fn sinks() -> (Box<dyn MeshSink>, Box<dyn AnimationSink>, Box<dyn CollisionSink>) { unimplemented!() }
//!
//! fn main() -> Result<(), SpriteError> {
//!     billboard_sprite::foundation::logging::init();
//!
//!     let config = SpriteConfig::default();
//!     let idle = SpriteCollection::new("idle", vec![Texture::solid("idle_0", 64, 64, [255; 4])]);
//!     let catalog = SpriteCatalog::new(vec![idle], config.pixels_per_world_unit)?;
//!
//!     let (mesh, animation, collision) = sinks();
//!     let mut switcher = SpriteStateSwitcher::builder(catalog.into_shared(), config)
//!         .mesh_sink(mesh)
//!         .animation_sink(animation)
//!         .collision_sink(collision)
//!         .build()?;
//!
//!     switcher.update(Vec3::zeros())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;
pub mod animation;
pub mod physics;
pub mod sprite;

mod error;

pub use error::SpriteError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        SpriteError,
        foundation::math::{Vec2, Vec3, PixelRect},
        config::{Config, ConfigError, SpriteConfig},
        assets::{ImageData, Texture, TextureRef},
        render::{
            BillboardMode, TextureFilter, SpriteMaterial, MaterialChannel, QuadMesh,
        },
        animation::{FrameTimeline, FrameAssignment, LoopMode},
        physics::collision::{BoxShape, CollisionShape},
        sprite::{
            SpriteCollection, SpriteCatalog, TextureLayerProvider, LayerKind,
            MeshSink, AnimationSink, CollisionSink,
            SpriteStateSwitcher, MovementState, MovementPolicy, SwitchOutcome,
        },
    };
}

//! # Sprite pipeline
//!
//! Control flow for one rebuild:
//!
//! 1. [`SpriteStateSwitcher`] picks a [`SpriteCollection`] from the
//!    [`TextureLayerProvider`]
//! 2. [`validator::validate`] gates it on uniform frame sizes
//! 3. [`builder`] produces the quad/material, the optional frame timeline
//!    and the collision box into one [`SpriteArtifacts`] bundle
//! 4. the bundle is handed to the [`sinks`] in one step

pub mod collection;
pub mod validator;
pub mod builder;
pub mod sinks;
pub mod switcher;


pub use collection::{LayerKind, SpriteCatalog, SpriteCollection, TextureLayerProvider};
pub use validator::{validate, ValidatedCollection};
pub use builder::{build_material_and_mesh, build_timeline, derive_collision_bounds, SpriteArtifacts};
pub use sinks::{AnimationSink, CollisionSink, MeshSink};
pub use switcher::{
    ActiveSpriteState, MovementPolicy, MovementState, SpriteStateSwitcher, SpriteStateSwitcherBuilder,
    SwitchOutcome,
};

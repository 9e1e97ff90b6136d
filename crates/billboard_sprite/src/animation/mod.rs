//! Sprite animation timelines

pub mod timeline;

pub use timeline::{FrameAssignment, FrameTimeline, Keyframe, LoopMode, TextureTrack};

/// Library the sprite timeline is registered in
pub const DEFAULT_LIBRARY: &str = "";

/// Name every sprite timeline is registered under
///
/// Rebuilding replaces the timeline stored under this name.
pub const SPRITE_SEQUENCE: &str = "sprite_sequence";

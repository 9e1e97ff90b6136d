//! Sink interfaces to the host engine
//!
//! The pipeline never touches rendering, animation or physics backends
//! directly. It hands finished artifacts to these one-way sinks.

use crate::animation::FrameTimeline;
use crate::physics::collision::CollisionShape;
use crate::render::QuadMesh;

/// Receives the quad and its material
pub trait MeshSink {
    /// Replace the displayed mesh
    fn set_mesh(&mut self, mesh: QuadMesh);
}

/// Receives frame timelines and playback commands
pub trait AnimationSink {
    /// Store a timeline under `name` in `library`, replacing any previous one
    fn install_timeline(&mut self, library: &str, name: &str, timeline: FrameTimeline);

    /// Drop the timeline stored under `name`, if any
    fn remove_timeline(&mut self, library: &str, name: &str);

    /// Set the playback speed multiplier
    fn set_speed_scale(&mut self, speed_scale: f32);

    /// Start playing a stored timeline from its first frame
    fn play(&mut self, name: &str);

    /// Stop playback
    fn stop(&mut self);
}

/// Receives the collision shape
pub trait CollisionSink {
    /// Replace the collision shape
    fn set_shape(&mut self, shape: CollisionShape);
}

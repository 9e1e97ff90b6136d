//! Sprite state switching
//!
//! Each sprite entity owns one [`SpriteStateSwitcher`]. It picks the active
//! collection, rebuilds artifacts only when the selection really changes,
//! and publishes the finished bundle to the sinks in one step. A rebuild
//! that fails validation publishes nothing, so the last valid sprite stays
//! on screen.

use std::sync::Arc;

use approx::relative_eq;

use super::builder::SpriteArtifacts;
use super::collection::{checked_pixels_per_world_unit, SpriteCollection, TextureLayerProvider};
use super::sinks::{AnimationSink, CollisionSink, MeshSink};
use super::validator::validate;
use crate::animation::{TextureTrack, DEFAULT_LIBRARY, SPRITE_SEQUENCE};
use crate::config::SpriteConfig;
use crate::foundation::math::Vec3;
use crate::SpriteError;

/// Locomotion state driving collection selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    /// Standing still
    #[default]
    Idle,
    /// Moving in the horizontal plane
    Moving,
}

impl MovementState {
    /// State for a movement direction; only the horizontal (x/z) plane counts
    pub fn from_direction(direction: Vec3) -> Self {
        if direction.x == 0.0 && direction.z == 0.0 {
            Self::Idle
        } else {
            Self::Moving
        }
    }
}

/// Collection index shown for each movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementPolicy {
    /// Collection shown while idle
    pub idle: usize,
    /// Collection shown while moving
    pub moving: usize,
}

impl Default for MovementPolicy {
    fn default() -> Self {
        Self { idle: 0, moving: 1 }
    }
}

impl MovementPolicy {
    /// Collection index for a state
    pub const fn collection_index(&self, state: MovementState) -> usize {
        match state {
            MovementState::Idle => self.idle,
            MovementState::Moving => self.moving,
        }
    }
}

/// Result of a selection request
#[derive(Debug)]
pub enum SwitchOutcome {
    /// Already showing that collection, nothing rebuilt
    Unchanged,
    /// Artifacts rebuilt and published
    Rebuilt,
    /// Collection failed validation, previous artifacts kept
    Rejected(SpriteError),
}

/// Currently displayed collection and the artifacts built from it
#[derive(Debug, Clone)]
pub struct ActiveSpriteState {
    /// Displayed collection
    pub collection: Arc<SpriteCollection>,
    /// Published artifacts
    pub artifacts: SpriteArtifacts,
}

struct SpriteSinks {
    mesh: Box<dyn MeshSink>,
    animation: Box<dyn AnimationSink>,
    collision: Box<dyn CollisionSink>,
}

impl SpriteSinks {
    fn publish(&mut self, artifacts: &SpriteArtifacts) {
        self.mesh.set_mesh(artifacts.mesh.clone());

        match &artifacts.timeline {
            Some(timeline) => {
                self.animation.set_speed_scale(timeline.speed_scale);
                self.animation.install_timeline(DEFAULT_LIBRARY, SPRITE_SEQUENCE, timeline.clone());
                // Restart from frame 0 even if the sink was mid-playback
                self.animation.stop();
                self.animation.play(SPRITE_SEQUENCE);
            }
            None => {
                // A stale timeline would keep overwriting the static textures
                self.animation.stop();
                self.animation.remove_timeline(DEFAULT_LIBRARY, SPRITE_SEQUENCE);
            }
        }

        self.collision.set_shape(artifacts.collision.clone());
    }
}

/// Builder for [`SpriteStateSwitcher`]
///
/// All three sinks are required.
pub struct SpriteStateSwitcherBuilder {
    provider: Arc<dyn TextureLayerProvider>,
    config: SpriteConfig,
    policy: MovementPolicy,
    mesh: Option<Box<dyn MeshSink>>,
    animation: Option<Box<dyn AnimationSink>>,
    collision: Option<Box<dyn CollisionSink>>,
}

impl SpriteStateSwitcherBuilder {
    /// Set the mesh/material sink
    #[must_use]
    pub fn mesh_sink(mut self, sink: Box<dyn MeshSink>) -> Self {
        self.mesh = Some(sink);
        self
    }

    /// Set the animation sink
    #[must_use]
    pub fn animation_sink(mut self, sink: Box<dyn AnimationSink>) -> Self {
        self.animation = Some(sink);
        self
    }

    /// Set the collision sink
    #[must_use]
    pub fn collision_sink(mut self, sink: Box<dyn CollisionSink>) -> Self {
        self.collision = Some(sink);
        self
    }

    /// Override the movement-to-collection mapping
    #[must_use]
    pub fn movement_policy(mut self, policy: MovementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check settings, collaborators and the world scale, then load the
    /// first collection
    pub fn build(self) -> Result<SpriteStateSwitcher, SpriteError> {
        self.config.validate()?;

        let sinks = SpriteSinks {
            mesh: self.mesh.ok_or(SpriteError::MissingCollaborator("mesh sink"))?,
            animation: self.animation.ok_or(SpriteError::MissingCollaborator("animation sink"))?,
            collision: self.collision.ok_or(SpriteError::MissingCollaborator("collision sink"))?,
        };

        // Quad and collider must divide by the same scale
        let provided = checked_pixels_per_world_unit(self.provider.pixels_per_world_unit())?;
        let configured = self.config.pixels_per_world_unit;
        if !relative_eq!(provided, configured) {
            log::error!("Provider scale {provided} does not match configured scale {configured}");
            return Err(SpriteError::ScaleMismatch { configured, provided });
        }

        if self.provider.count() == 0 {
            log::error!("No sprite collections provided");
            return Err(SpriteError::EmptyCatalog);
        }

        let mut switcher = SpriteStateSwitcher {
            provider: self.provider,
            config: self.config,
            policy: self.policy,
            sinks,
            selected: None,
            active: None,
            movement: MovementState::Idle,
        };

        let initial = switcher.policy.collection_index(MovementState::Idle);
        switcher.select(initial)?;

        Ok(switcher)
    }
}

/// Per-entity collection selector and rebuild pipeline
pub struct SpriteStateSwitcher {
    provider: Arc<dyn TextureLayerProvider>,
    config: SpriteConfig,
    policy: MovementPolicy,
    sinks: SpriteSinks,
    selected: Option<Arc<SpriteCollection>>,
    active: Option<ActiveSpriteState>,
    movement: MovementState,
}

impl SpriteStateSwitcher {
    /// Start building a switcher over a shared collection provider
    pub fn builder<P>(provider: Arc<P>, config: SpriteConfig) -> SpriteStateSwitcherBuilder
    where
        P: TextureLayerProvider + 'static,
    {
        SpriteStateSwitcherBuilder {
            provider,
            config,
            policy: MovementPolicy::default(),
            mesh: None,
            animation: None,
            collision: None,
        }
    }

    /// Select the collection at `index`
    ///
    /// Selecting the collection already selected (by name) is a no-op.
    /// Validation failures are logged and returned as
    /// [`SwitchOutcome::Rejected`]; only an out-of-range index is an error.
    pub fn select(&mut self, index: usize) -> Result<SwitchOutcome, SpriteError> {
        let Some(collection) = self.provider.get(index).cloned() else {
            let err = SpriteError::InvalidIndex {
                index,
                count: self.provider.count(),
            };
            log::error!("{err}");
            return Err(err);
        };

        if self.selected.as_ref().is_some_and(|current| current.name == collection.name) {
            log::trace!("Sprite collection '{}' already selected", collection.name);
            return Ok(SwitchOutcome::Unchanged);
        }

        // Recorded even if the rebuild fails, so a bad collection is
        // reported once rather than on every step
        self.selected = Some(Arc::clone(&collection));

        match self.rebuild(collection) {
            Ok(()) => Ok(SwitchOutcome::Rebuilt),
            Err(err) => {
                log::warn!("Sprite rebuild rejected, keeping previous sprite: {err}");
                Ok(SwitchOutcome::Rejected(err))
            }
        }
    }

    /// Per-step update from the movement direction
    pub fn update(&mut self, direction: Vec3) -> Result<SwitchOutcome, SpriteError> {
        self.movement = MovementState::from_direction(direction);
        self.select(self.policy.collection_index(self.movement))
    }

    fn rebuild(&mut self, collection: Arc<SpriteCollection>) -> Result<(), SpriteError> {
        let pixels_per_world_unit = self.provider.pixels_per_world_unit();
        let artifacts = {
            let validated = validate(&collection, self.config.size_epsilon)?;
            SpriteArtifacts::build(&validated, &self.config, pixels_per_world_unit)
        };

        self.sinks.publish(&artifacts);

        log::info!(
            "Loaded sprite collection '{}' ({} frames, quad {}x{})",
            collection.name,
            collection.frame_count(),
            artifacts.mesh.size.x,
            artifacts.mesh.size.y
        );

        self.active = Some(ActiveSpriteState { collection, artifacts });
        Ok(())
    }

    /// Last successfully published state
    pub const fn active(&self) -> Option<&ActiveSpriteState> {
        self.active.as_ref()
    }

    /// Name of the most recently selected collection
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref().map(|collection| collection.name.as_str())
    }

    /// Current movement state
    pub const fn movement_state(&self) -> MovementState {
        self.movement
    }

    /// Sprite settings
    pub const fn config(&self) -> &SpriteConfig {
        &self.config
    }

    /// Value tracks of the active timeline, addressed at the configured mesh node
    pub fn timeline_tracks(&self) -> Vec<TextureTrack> {
        self.active
            .as_ref()
            .and_then(|state| state.artifacts.timeline.as_ref())
            .map(|timeline| timeline.tracks(&self.config.mesh_node_name))
            .unwrap_or_default()
    }
}

//! Frame timelines
//!
//! A timeline holds one [`FrameAssignment`] per albedo frame. Each frame
//! lasts one time unit; playback speed comes from `speed_scale`.

use crate::assets::TextureRef;
use crate::render::MaterialChannel;

/// What happens when playback reaches the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoopMode {
    /// Hold the last frame
    None,
    /// Wrap back to frame 0
    #[default]
    Linear,
}

/// Channel textures shown during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAssignment {
    /// Albedo texture
    pub albedo: TextureRef,
    /// Normal texture, absent when the collection has no normal layer
    pub normal: Option<TextureRef>,
    /// Occlusion texture, absent when the collection has no occlusion layer
    pub ambient_occlusion: Option<TextureRef>,
}

impl FrameAssignment {
    /// Texture for a channel
    pub fn texture(&self, channel: MaterialChannel) -> Option<&TextureRef> {
        match channel {
            MaterialChannel::Albedo => Some(&self.albedo),
            MaterialChannel::Normal => self.normal.as_ref(),
            MaterialChannel::AmbientOcclusion => self.ambient_occlusion.as_ref(),
        }
    }
}

/// Single key on a texture track
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Key time in frame units
    pub time: f32,
    /// Texture assigned at this key
    pub texture: TextureRef,
}

/// Value track that swaps one material channel
#[derive(Debug, Clone, PartialEq)]
pub struct TextureTrack {
    /// Channel written by this track
    pub channel: MaterialChannel,
    /// Property path of the channel on the mesh node
    pub path: String,
    /// Keys in time order
    pub keys: Vec<Keyframe>,
}

/// Looping per-frame texture timeline
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTimeline {
    frames: Vec<FrameAssignment>,
    /// Loop behaviour at the end of the timeline
    pub loop_mode: LoopMode,
    /// Playback speed multiplier
    pub speed_scale: f32,
}

impl FrameTimeline {
    /// Create a looping timeline
    pub fn new(frames: Vec<FrameAssignment>, speed_scale: f32) -> Self {
        Self {
            frames,
            loop_mode: LoopMode::Linear,
            speed_scale,
        }
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the timeline has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Timeline length in frame units
    pub fn duration(&self) -> f32 {
        self.frames.len() as f32
    }

    /// All frames in order
    pub fn frames(&self) -> &[FrameAssignment] {
        &self.frames
    }

    /// Frame at an index
    pub fn frame(&self, index: usize) -> Option<&FrameAssignment> {
        self.frames.get(index)
    }

    /// Frame index shown at a playback time, in frame units
    pub fn frame_index_at(&self, time: f32) -> Option<usize> {
        if self.frames.is_empty() || !time.is_finite() {
            return None;
        }
        let last = self.frames.len() - 1;
        let time = match self.loop_mode {
            LoopMode::Linear => time.rem_euclid(self.duration()),
            LoopMode::None => time.max(0.0),
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = time.floor() as usize;
        Some(index.min(last))
    }

    /// Frame shown at a playback time
    pub fn sample(&self, time: f32) -> Option<&FrameAssignment> {
        self.frame_index_at(time).and_then(|index| self.frame(index))
    }

    /// Value tracks for the channels this timeline drives
    ///
    /// The albedo track is always present; normal and occlusion tracks only
    /// when their layer exists.
    pub fn tracks(&self, mesh_node: &str) -> Vec<TextureTrack> {
        MaterialChannel::ALL
            .into_iter()
            .filter_map(|channel| {
                let keys = self
                    .frames
                    .iter()
                    .enumerate()
                    .map(|(i, frame)| {
                        frame.texture(channel).map(|texture| Keyframe {
                            time: i as f32,
                            texture: texture.clone(),
                        })
                    })
                    .collect::<Option<Vec<_>>>()?;
                if keys.is_empty() {
                    return None;
                }
                Some(TextureTrack {
                    channel,
                    path: channel.property_path(mesh_node),
                    keys,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Texture;
    use std::sync::Arc;

    fn frames(count: usize, with_normal: bool) -> Vec<FrameAssignment> {
        (0..count)
            .map(|i| FrameAssignment {
                albedo: Arc::new(Texture::solid(format!("a{i}"), 4, 4, [255; 4])),
                normal: with_normal.then(|| Arc::new(Texture::solid(format!("n{i}"), 4, 4, [255; 4]))),
                ambient_occlusion: None,
            })
            .collect()
    }

    #[test]
    fn test_linear_loop_wraps() {
        let timeline = FrameTimeline::new(frames(4, false), 5.0);

        assert_eq!(timeline.frame_index_at(0.0), Some(0));
        assert_eq!(timeline.frame_index_at(3.5), Some(3));
        assert_eq!(timeline.frame_index_at(4.0), Some(0));
        assert_eq!(timeline.frame_index_at(9.2), Some(1));
        assert_eq!(timeline.frame_index_at(-0.5), Some(3));
        assert_eq!(timeline.sample(6.0).map(|f| f.albedo.name.as_str()), Some("a2"));
    }

    #[test]
    fn test_no_loop_holds_last_frame() {
        let mut timeline = FrameTimeline::new(frames(3, false), 1.0);
        timeline.loop_mode = LoopMode::None;
        assert_eq!(timeline.frame_index_at(10.0), Some(2));
    }

    #[test]
    fn test_empty_timeline_has_no_frames() {
        let timeline = FrameTimeline::new(Vec::new(), 1.0);
        assert!(timeline.is_empty());
        assert_eq!(timeline.frame_index_at(0.0), None);
        assert!(timeline.tracks("Mesh").is_empty());
    }

    #[test]
    fn test_tracks_follow_present_channels() {
        let timeline = FrameTimeline::new(frames(3, true), 1.0);
        let tracks = timeline.tracks("Sprite");

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].channel, MaterialChannel::Albedo);
        assert_eq!(tracks[1].path, "Sprite:mesh:material:normal_texture");
        assert_eq!(tracks[1].keys.len(), 3);
        assert_eq!(tracks[1].keys[2].time, 2.0);
        assert_eq!(tracks[1].keys[2].texture.name, "n2");
    }
}

use crate::{skeleton::BoneIndex, track::Track, transform::Transform};

/// Key frames targeting a single bone.
#[derive(Clone, Debug, Default)]
pub struct BoneTrack {
    pub bone: BoneIndex,
    pub keys: Track<Transform>,
}

/// A loaded animation asset: one key frame track per animated bone.
///
/// Tracks are immutable once loaded; joints reference them by index and the
/// motion keeps ownership.
#[derive(Clone, Debug)]
pub struct Motion {
    pub name: String,
    /// Total playback length in ticks.
    pub duration: u32,
    /// Seconds-to-ticks conversion rate for this motion's clock.
    pub ticks_per_second: f32,
    pub tracks: Vec<BoneTrack>,
}

impl Motion {
    pub fn new(name: impl Into<String>, duration: u32, ticks_per_second: f32) -> Self {
        Self {
            name: name.into(),
            duration,
            ticks_per_second,
            tracks: Vec::new(),
        }
    }

    pub fn add_track(&mut self, bone: BoneIndex, keys: Track<Transform>) {
        self.tracks.push(BoneTrack { bone, keys });
    }

    /// Highest key frame tick across all tracks.
    pub fn last_tick(&self) -> u32 {
        self.tracks
            .iter()
            .filter_map(|track| track.keys.last_tick())
            .max()
            .unwrap_or(0)
    }
}

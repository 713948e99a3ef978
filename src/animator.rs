use tracing::warn;

use crate::{
    model::Model,
    motions::{MotionId, Motions},
    pose::{Pose, RootTransform, generate_pose_into},
    track::SampleMode,
};

/// Tuning for pose evaluation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaybackOptions {
    pub sample_mode: SampleMode,
    pub root_transform: RootTransform,
}

/// Drives one model instance: binds motions to its skeleton and refreshes
/// its pose from the frame clock.
///
/// Switching motions and advancing playback both take `&mut self`, so the
/// two can never overlap.
pub struct Animator {
    model: Model,
    pose: Pose,
    options: PlaybackOptions,
    motion: Option<MotionId>,
    elapsed: f32,
    tick: u32,
}

impl Animator {
    pub fn new(model: Model) -> Self {
        Self::with_options(model, PlaybackOptions::default())
    }

    pub fn with_options(model: Model, options: PlaybackOptions) -> Self {
        Self {
            model,
            pose: Pose::default(),
            options,
            motion: None,
            elapsed: 0.0,
            tick: 0,
        }
    }

    /// Start playing `motion`, replacing any current one. Playback restarts
    /// from tick zero; the pose refreshes on the next [Animator::update].
    pub fn play(&mut self, motion: MotionId, motions: &Motions) {
        let Some(resolved) = motions.get(motion) else {
            warn!("Trying to play a missing motion: {motion:?}");
            self.stop();
            return;
        };

        self.model.skeleton.bind_motion(resolved);
        self.motion = Some(motion);
        self.elapsed = 0.0;
        self.tick = 0;
    }

    /// Detach the current motion; the pose returns to identity.
    pub fn stop(&mut self) {
        self.model.skeleton.clear_tracks();
        self.motion = None;
        self.elapsed = 0.0;
        self.tick = 0;
        self.pose.reset();
    }

    /// Advance playback by `delta_time` seconds and recompute the pose.
    ///
    /// The tick is derived from the elapsed clock at the motion's rate; on
    /// reaching the motion's duration the clock restarts from zero rather
    /// than clamping to the final tick.
    pub fn update(&mut self, motions: &Motions, delta_time: f32) {
        let Some(id) = self.motion else {
            return;
        };
        let Some(motion) = motions.get(id) else {
            warn!("Current motion is gone from the registry: {id:?}");
            self.stop();
            return;
        };

        self.elapsed += delta_time;
        self.tick = (self.elapsed * motion.ticks_per_second) as u32;
        if self.tick >= motion.duration {
            self.elapsed = 0.0;
            self.tick = 0;
        }

        generate_pose_into(
            &self.model.skeleton,
            motion,
            self.tick,
            self.options.sample_mode,
            self.options.root_transform,
            &mut self.pose,
        );
    }

    #[inline]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The current frame's world matrices, one slot per bone id.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    #[inline]
    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.motion.is_some()
    }
}

use glam::Mat4;

use crate::{
    motion::Motion,
    skeleton::{BONE_SENTINEL, BoneIndex, MAX_BONES, Skeleton},
    track::SampleMode,
};

/// Whether the root joint's own track contributes to its world matrix.
///
/// [RootTransform::Discard], the default, leaves the root at identity even
/// when a track targets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RootTransform {
    #[default]
    Discard,
    Apply,
}

/// Dense per-bone world matrices, sized for the skinning uniform. Slots with
/// no joint, and joints with no bound track, hold the identity matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    pub bones: Vec<Mat4>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            bones: vec![Mat4::IDENTITY; MAX_BONES],
        }
    }
}

impl Pose {
    pub fn reset(&mut self) {
        self.bones.clear();
        self.bones.resize(MAX_BONES, Mat4::IDENTITY);
    }

    /// Raw bytes of the matrix array, ready for uniform upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.bones)
    }
}

/// Recompute `pose` for `skeleton` at `tick` of `motion`.
///
/// Pure function of its inputs: joints are visited top-down from the root,
/// children strictly after their parent, and each joint's world matrix is
/// `parent * rotation * translation` of its sampled key frame. Joints with
/// no bound track keep the identity matrix, whatever their parent's matrix.
pub fn generate_pose_into(
    skeleton: &Skeleton,
    motion: &Motion,
    tick: u32,
    mode: SampleMode,
    root: RootTransform,
    pose: &mut Pose,
) {
    pose.reset();
    evaluate_joint(skeleton, motion, tick, mode, root, skeleton.root(), pose);
}

/// [generate_pose_into] with a freshly allocated [Pose].
pub fn generate_pose(
    skeleton: &Skeleton,
    motion: &Motion,
    tick: u32,
    mode: SampleMode,
    root: RootTransform,
) -> Pose {
    let mut pose = Pose::default();
    generate_pose_into(skeleton, motion, tick, mode, root, &mut pose);
    pose
}

fn evaluate_joint(
    skeleton: &Skeleton,
    motion: &Motion,
    tick: u32,
    mode: SampleMode,
    root: RootTransform,
    index: BoneIndex,
    pose: &mut Pose,
) {
    let joint = &skeleton.joints()[index as usize];

    let sampled = joint
        .track
        .and_then(|track| motion.tracks.get(track))
        .and_then(|track| track.keys.sample(tick, mode));

    if let Some(key) = sampled {
        let local = Mat4::from_quat(key.rotation) * Mat4::from_translation(key.translation);
        pose.bones[index as usize] = if joint.parent != BONE_SENTINEL {
            pose.bones[joint.parent as usize] * local
        } else {
            match root {
                RootTransform::Discard => Mat4::IDENTITY,
                RootTransform::Apply => local,
            }
        };
    }

    for &child in &joint.children {
        evaluate_joint(skeleton, motion, tick, mode, root, child, pose);
    }
}

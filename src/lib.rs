//! Skeletal animation core for skinned character models: builds a joint
//! table from a bone definition tree, binds key frame motion tracks to it,
//! samples them at playback time, composes world-space bone matrices and
//! prepares the per-vertex skinning attributes an external GPU pipeline
//! consumes.

pub mod animator;
pub mod gizmos;
pub mod interpolate;
pub mod model;
pub mod motion;
pub mod motions;
pub mod pose;
pub mod skeleton;
pub mod skinning;
pub mod track;
pub mod transform;

pub use animator::{Animator, PlaybackOptions};
pub use gizmos::GizmoVertex;
pub use interpolate::Interpolate;
pub use model::{Face, Model, ModelError, SkinnedVertex, SubMesh};
pub use motion::{BoneTrack, Motion};
pub use motions::{MotionId, Motions};
pub use pose::{Pose, RootTransform, generate_pose, generate_pose_into};
pub use skeleton::{BONE_SENTINEL, BoneIndex, BoneNode, Joint, MAX_BONES, Skeleton};
pub use skinning::{MAX_INFLUENCES, SkinAttributes};
pub use track::{Key, SampleMode, Track};
pub use transform::Transform;

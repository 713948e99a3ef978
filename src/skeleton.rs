use tracing::{debug, info};

use crate::{model::ModelError, motion::Motion, pose::Pose, transform::Transform};

pub type BoneIndex = u32;

/// Marks a joint with no parent.
pub const BONE_SENTINEL: BoneIndex = BoneIndex::MAX;

/// Upper bound on bones per model, fixed by the skinning uniform layout.
pub const MAX_BONES: usize = 50;

/// A node in the bone definition tree supplied by the mesh asset. The tree
/// shape defines parentage; bone ids must densely cover `[0, bone count)`.
#[derive(Clone, Debug)]
pub struct BoneNode {
    pub id: BoneIndex,
    pub transform: Transform,
    pub children: Vec<BoneNode>,
}

impl BoneNode {
    pub fn new(id: BoneIndex, transform: Transform) -> Self {
        Self {
            id,
            transform,
            children: Vec::new(),
        }
    }
}

/// One entry of the joint table.
#[derive(Clone, Debug)]
pub struct Joint {
    pub parent: BoneIndex,
    pub bind: Transform,
    pub children: Vec<BoneIndex>,
    /// Index into the bound motion's track list.
    pub track: Option<usize>,
}

/// Flat joint table indexed by bone id, plus the root to start traversal
/// from.
#[derive(Clone, Debug)]
pub struct Skeleton {
    joints: Vec<Joint>,
    root: BoneIndex,
}

impl Skeleton {
    /// Build the joint table by walking the definition tree depth-first.
    ///
    /// Every bone reachable from the root lands in the table exactly once,
    /// the root included. Fails if the bone count exceeds [MAX_BONES] or if
    /// the ids do not densely cover `[0, bone count)`.
    pub fn from_bone_tree(root: &BoneNode) -> Result<Self, ModelError> {
        fn walk(node: &BoneNode, parent: BoneIndex, out: &mut Vec<(BoneIndex, Joint)>) {
            out.push((
                node.id,
                Joint {
                    parent,
                    bind: node.transform,
                    children: node.children.iter().map(|child| child.id).collect(),
                    track: None,
                },
            ));
            for child in &node.children {
                walk(child, node.id, out);
            }
        }

        let mut collected = Vec::new();
        walk(root, BONE_SENTINEL, &mut collected);

        let count = collected.len();
        if count > MAX_BONES {
            return Err(ModelError::TooManyBones(count));
        }

        let mut slots: Vec<Option<Joint>> = (0..count).map(|_| None).collect();
        for (id, joint) in collected {
            match slots.get_mut(id as usize) {
                Some(Some(_)) => return Err(ModelError::DuplicateBone(id)),
                Some(slot) => *slot = Some(joint),
                // An id past the table surfaces as a missing slot below.
                None => {}
            }
        }

        let joints = slots
            .into_iter()
            .enumerate()
            .map(|(id, slot)| slot.ok_or(ModelError::MissingBone(id as BoneIndex)))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Skeleton built: {} joints", joints.len());

        Ok(Self {
            joints,
            root: root.id,
        })
    }

    #[inline]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    #[inline]
    pub fn root(&self) -> BoneIndex {
        self.root
    }

    #[inline]
    pub fn bone_count(&self) -> usize {
        self.joints.len()
    }

    /// Joint indices in evaluation order: every parent strictly before any
    /// of its children, siblings in definition order.
    pub fn traversal(&self) -> Vec<BoneIndex> {
        fn push_order(joints: &[Joint], index: BoneIndex, out: &mut Vec<BoneIndex>) {
            out.push(index);
            for &child in &joints[index as usize].children {
                push_order(joints, child, out);
            }
        }

        let mut order = Vec::with_capacity(self.joints.len());
        push_order(&self.joints, self.root, &mut order);
        order
    }

    /// Attach `motion`'s tracks to the joints they target, clearing any
    /// previous binding first. Tracks targeting bones this skeleton does not
    /// have are skipped; newer motion data may reference bones an older
    /// skeleton lacks.
    pub fn bind_motion(&mut self, motion: &Motion) {
        self.clear_tracks();

        for (index, track) in motion.tracks.iter().enumerate() {
            match self.joints.get_mut(track.bone as usize) {
                Some(joint) => joint.track = Some(index),
                None => debug!(
                    "Motion {} targets unknown bone {}, skipping",
                    motion.name, track.bone
                ),
            }
        }
    }

    pub fn clear_tracks(&mut self) {
        for joint in &mut self.joints {
            joint.track = None;
        }
    }

    /// World matrices of the bind pose, before any motion is applied.
    pub fn rest_pose(&self) -> Pose {
        let mut pose = Pose::default();

        for index in self.traversal() {
            let joint = &self.joints[index as usize];
            let local = joint.bind.to_mat4();
            pose.bones[index as usize] = if joint.parent == BONE_SENTINEL {
                local
            } else {
                pose.bones[joint.parent as usize] * local
            };
        }

        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Track;
    use glam::Vec3;

    /// A straight chain of `count` bones with ids `0..count`.
    fn chain(count: u32) -> BoneNode {
        let mut node = BoneNode::new(count - 1, Transform::default());
        for id in (0..count - 1).rev() {
            let mut parent = BoneNode::new(id, Transform::default());
            parent.children.push(node);
            node = parent;
        }
        node
    }

    fn single_key_track() -> Track<Transform> {
        let mut keys = Track::default();
        keys.insert(0, Transform::default());
        keys
    }

    #[test]
    fn builds_one_joint_per_bone_id() {
        let mut root = BoneNode::new(0, Transform::default());
        let mut left = BoneNode::new(1, Transform::default());
        left.children.push(BoneNode::new(3, Transform::default()));
        root.children.push(left);
        root.children.push(BoneNode::new(2, Transform::default()));

        let skeleton = Skeleton::from_bone_tree(&root).unwrap();
        assert_eq!(skeleton.bone_count(), 4);
        assert_eq!(skeleton.root(), 0);

        assert_eq!(skeleton.joints()[0].parent, BONE_SENTINEL);
        assert_eq!(skeleton.joints()[1].parent, 0);
        assert_eq!(skeleton.joints()[2].parent, 0);
        assert_eq!(skeleton.joints()[3].parent, 1);
    }

    #[test]
    fn accepts_the_maximum_bone_count() {
        let skeleton = Skeleton::from_bone_tree(&chain(MAX_BONES as u32)).unwrap();
        assert_eq!(skeleton.bone_count(), MAX_BONES);
    }

    #[test]
    fn rejects_one_bone_over_the_maximum() {
        let err = Skeleton::from_bone_tree(&chain(MAX_BONES as u32 + 1)).unwrap_err();
        assert!(matches!(err, ModelError::TooManyBones(51)));
    }

    #[test]
    fn rejects_duplicate_bone_ids() {
        let mut root = BoneNode::new(0, Transform::default());
        root.children.push(BoneNode::new(1, Transform::default()));
        root.children.push(BoneNode::new(1, Transform::default()));

        let err = Skeleton::from_bone_tree(&root).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateBone(1)));
    }

    #[test]
    fn rejects_gaps_in_bone_ids() {
        let mut root = BoneNode::new(0, Transform::default());
        root.children.push(BoneNode::new(2, Transform::default()));

        let err = Skeleton::from_bone_tree(&root).unwrap_err();
        assert!(matches!(err, ModelError::MissingBone(1)));
    }

    #[test]
    fn traversal_visits_parents_before_children() {
        let mut root = BoneNode::new(0, Transform::default());
        let mut left = BoneNode::new(1, Transform::default());
        left.children.push(BoneNode::new(3, Transform::default()));
        root.children.push(left);
        root.children.push(BoneNode::new(2, Transform::default()));

        let skeleton = Skeleton::from_bone_tree(&root).unwrap();
        let order = skeleton.traversal();
        assert_eq!(order, vec![0, 1, 3, 2]);

        for (position, &index) in order.iter().enumerate() {
            let parent = skeleton.joints()[index as usize].parent;
            if parent != BONE_SENTINEL {
                let parent_position = order.iter().position(|&i| i == parent).unwrap();
                assert!(parent_position < position);
            }
        }
    }

    #[test]
    fn rebinding_the_same_motion_is_idempotent() {
        let mut skeleton = Skeleton::from_bone_tree(&chain(3)).unwrap();

        let mut motion = Motion::new("walk", 10, 30.0);
        motion.add_track(1, single_key_track());
        motion.add_track(2, single_key_track());

        skeleton.bind_motion(&motion);
        let first: Vec<_> = skeleton.joints().iter().map(|j| j.track).collect();

        skeleton.bind_motion(&motion);
        let second: Vec<_> = skeleton.joints().iter().map(|j| j.track).collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn binding_ignores_unknown_bones() {
        let mut skeleton = Skeleton::from_bone_tree(&chain(2)).unwrap();

        let mut motion = Motion::new("walk", 10, 30.0);
        motion.add_track(1, single_key_track());
        motion.add_track(17, single_key_track());

        skeleton.bind_motion(&motion);
        assert_eq!(skeleton.joints()[1].track, Some(0));
    }

    #[test]
    fn binding_replaces_the_previous_motion() {
        let mut skeleton = Skeleton::from_bone_tree(&chain(3)).unwrap();

        let mut walk = Motion::new("walk", 10, 30.0);
        walk.add_track(1, single_key_track());
        walk.add_track(2, single_key_track());
        skeleton.bind_motion(&walk);

        let mut idle = Motion::new("idle", 10, 30.0);
        idle.add_track(2, single_key_track());
        skeleton.bind_motion(&idle);

        let tracks: Vec<_> = skeleton.joints().iter().map(|j| j.track).collect();
        assert_eq!(tracks, vec![None, None, Some(0)]);
    }

    #[test]
    fn rest_pose_composes_bind_transforms() {
        let step = Transform::from_translation(Vec3::new(0.0, 1.0, 0.0));
        let mut root = BoneNode::new(0, step);
        let mut middle = BoneNode::new(1, step);
        middle.children.push(BoneNode::new(2, step));
        root.children.push(middle);

        let skeleton = Skeleton::from_bone_tree(&root).unwrap();
        let pose = skeleton.rest_pose();

        assert_eq!(pose.bones[1].w_axis.truncate(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(pose.bones[2].w_axis.truncate(), Vec3::new(0.0, 3.0, 0.0));
    }
}

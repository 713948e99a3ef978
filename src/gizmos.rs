use glam::{Vec3, Vec4};

use crate::{
    pose::Pose,
    skeleton::{BONE_SENTINEL, Skeleton},
};

/// A colored line-list vertex for debug rendering.
#[derive(Clone, Copy, Debug, bytemuck::NoUninit)]
#[repr(C)]
pub struct GizmoVertex {
    position: Vec3,
    _padding: f32,
    color: Vec4,
}

impl GizmoVertex {
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position,
            _padding: 1.0,
            color,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

/// A small cube for marking joint positions, as vertex positions and
/// triangle indices.
pub fn bone_cube(size: f32) -> (Vec<Vec3>, Vec<u32>) {
    let vertices = vec![
        Vec3::new(-size, -size, -size),
        Vec3::new(-size, size, -size),
        Vec3::new(size, -size, -size),
        Vec3::new(size, size, -size),
        Vec3::new(-size, -size, size),
        Vec3::new(-size, size, size),
        Vec3::new(size, -size, size),
        Vec3::new(size, size, size),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2, 2, 1, 3,
        4, 5, 6, 6, 5, 7,
        4, 5, 0, 0, 5, 1,
        2, 6, 3, 3, 6, 7,
        1, 5, 3, 3, 5, 7,
        0, 4, 2, 2, 4, 6,
    ];

    (vertices, indices)
}

/// Line segments connecting each posed joint to its parent, ready for a
/// line-list pipeline.
pub fn skeleton_lines(skeleton: &Skeleton, pose: &Pose, color: Vec4) -> Vec<GizmoVertex> {
    let mut vertices = Vec::new();

    for (index, joint) in skeleton.joints().iter().enumerate() {
        if joint.parent == BONE_SENTINEL {
            continue;
        }

        let from = pose.bones[joint.parent as usize].w_axis.truncate();
        let to = pose.bones[index].w_axis.truncate();
        vertices.push(GizmoVertex::new(from, color));
        vertices.push(GizmoVertex::new(to, color));
    }

    vertices
}

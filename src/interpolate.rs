use glam::{Quat, Vec3};

use crate::transform::Transform;

pub trait Interpolate: Copy {
    fn interpolate(left: Self, right: Self, n: f32) -> Self;
}

impl Interpolate for Vec3 {
    #[inline]
    fn interpolate(left: Self, right: Self, n: f32) -> Self {
        left.lerp(right, n)
    }
}

impl Interpolate for Quat {
    #[inline]
    fn interpolate(left: Self, right: Self, n: f32) -> Self {
        left.slerp(right, n)
    }
}

/// A whole key frame interpolates as one value: lerp the translation, slerp
/// the rotation.
impl Interpolate for Transform {
    #[inline]
    fn interpolate(left: Self, right: Self, n: f32) -> Self {
        Self {
            translation: left.translation.lerp(right.translation, n),
            rotation: left.rotation.slerp(right.rotation, n),
        }
    }
}

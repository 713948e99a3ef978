use glam::{UVec4, Vec4};
use tracing::warn;

use crate::model::SkinnedVertex;

/// Bone influences carried per vertex by the mesh format.
pub const MAX_INFLUENCES: usize = 4;

/// Per-vertex skinning attributes, positionally parallel to the source
/// vertex list. Weights sum to one per vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkinAttributes {
    pub bone_indices: Vec<UVec4>,
    pub weights: Vec<Vec4>,
}

/// Normalize each vertex's bone weights and pack them, with their bone
/// indices, into the two attribute arrays the skinning shader consumes.
///
/// A vertex whose weights do not sum to a positive value gets full weight on
/// its first influence instead of propagating a division by zero.
pub fn prepare(vertices: &[SkinnedVertex]) -> SkinAttributes {
    let mut attributes = SkinAttributes {
        bone_indices: Vec::with_capacity(vertices.len()),
        weights: Vec::with_capacity(vertices.len()),
    };

    for (index, vertex) in vertices.iter().enumerate() {
        let weights = Vec4::from_array(vertex.weights);
        let sum = weights.element_sum();

        let weights = if sum > 0.0 {
            weights / sum
        } else {
            warn!("Vertex {index} has a degenerate weight sum, using its first influence only");
            Vec4::new(1.0, 0.0, 0.0, 0.0)
        };

        attributes
            .bone_indices
            .push(UVec4::from_array(vertex.bone_indices));
        attributes.weights.push(weights);
    }

    attributes
}

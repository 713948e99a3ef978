use glam::Vec3;
use thiserror::Error;
use tracing::info;

use crate::{
    skeleton::{BoneIndex, BoneNode, MAX_BONES, Skeleton},
    skinning::{self, MAX_INFLUENCES, SkinAttributes},
};

/// Structural faults in model data, detected before playback begins. A model
/// that fails to build exposes nothing to the renderer.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("bone count {0} exceeds the maximum of {max}", max = MAX_BONES)]
    TooManyBones(usize),

    #[error("bone id {0} appears more than once in the hierarchy")]
    DuplicateBone(BoneIndex),

    #[error("bone id {0} is missing from the hierarchy")]
    MissingBone(BoneIndex),

    #[error("vertex {vertex} of submesh {mesh} references bone {bone} outside the skinning range")]
    InvalidBoneReference {
        mesh: usize,
        vertex: usize,
        bone: BoneIndex,
    },
}

/// One vertex of a skinned submesh, as supplied by the mesh asset.
#[derive(Clone, Copy, Debug)]
pub struct SkinnedVertex {
    pub position: Vec3,
    pub bone_indices: [u32; MAX_INFLUENCES],
    pub weights: [f32; MAX_INFLUENCES],
}

/// A triangle referencing submesh vertices.
#[derive(Clone, Copy, Debug)]
pub struct Face {
    pub indices: [u32; 3],
}

/// One submesh: geometry plus its prepared skinning attributes.
#[derive(Clone, Debug)]
pub struct SubMesh {
    pub texture_name: String,
    pub vertices: Vec<SkinnedVertex>,
    pub faces: Vec<Face>,
    pub skin: SkinAttributes,
}

impl SubMesh {
    /// Wrap raw submesh data, preparing its skin attributes once.
    pub fn new(
        texture_name: impl Into<String>,
        vertices: Vec<SkinnedVertex>,
        faces: Vec<Face>,
    ) -> Self {
        let skin = skinning::prepare(&vertices);
        Self {
            texture_name: texture_name.into(),
            vertices,
            faces,
            skin,
        }
    }

    /// Flat vertex positions for mesh upload.
    pub fn positions(&self) -> Vec<Vec3> {
        self.vertices.iter().map(|vertex| vertex.position).collect()
    }

    /// Flat triangle index list for mesh upload.
    pub fn indices(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|face| face.indices).collect()
    }
}

/// A skinned character model: the joint table plus its submeshes.
#[derive(Clone, Debug)]
pub struct Model {
    pub skeleton: Skeleton,
    pub meshes: Vec<SubMesh>,
}

impl Model {
    /// Build a model from a bone definition tree and its submeshes.
    pub fn new(bone_root: &BoneNode, meshes: Vec<SubMesh>) -> Result<Self, ModelError> {
        let skeleton = Skeleton::from_bone_tree(bone_root)?;

        for (mesh_index, mesh) in meshes.iter().enumerate() {
            for (vertex_index, vertex) in mesh.vertices.iter().enumerate() {
                for &bone in &vertex.bone_indices {
                    if bone as usize >= MAX_BONES {
                        return Err(ModelError::InvalidBoneReference {
                            mesh: mesh_index,
                            vertex: vertex_index,
                            bone,
                        });
                    }
                }
            }
        }

        info!(
            "Model loaded: {} joints, {} submeshes",
            skeleton.bone_count(),
            meshes.len()
        );

        Ok(Self { skeleton, meshes })
    }
}

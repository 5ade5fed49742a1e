//! Flattening a loaded scene into a single material-grouped geometry

use crate::geometry::MergedGeometry;
use crate::material::Material;
use crate::scene::SceneNode;
use crate::transform::Transform3D;
use crate::Result;
use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

/// Normalization settings applied while parsing a loaded model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParseSettings {
    /// Orientation forced onto the model root, aligning it with the world
    pub orientation: UnitQuaternion<f32>,
    /// Uniform scale applied to every mesh geometry
    pub scale: f32,
}

impl ParseSettings {
    pub fn new(orientation: UnitQuaternion<f32>, scale: f32) -> Self {
        Self { orientation, scale }
    }

    /// Settings with a non-finite or non-positive scale fall back to 1.0
    pub fn sanitized(self) -> Self {
        let scale = if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        };
        Self { scale, ..self }
    }
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            orientation: UnitQuaternion::identity(),
            scale: 1.0,
        }
    }
}

/// A model normalized and flattened for rendering
///
/// `materials` is indexed by slot in first-occurrence order; every group of
/// `merged` references one of those slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedModel {
    pub name: String,
    /// The re-oriented scene root the merged geometry was built from
    pub root: SceneNode,
    pub materials: Vec<Material>,
    pub merged: MergedGeometry,
}

impl ParsedModel {
    /// Normalize `root` and merge every mesh of its subtree
    ///
    /// The settings orientation replaces the root's rotation, every mesh
    /// geometry is scaled uniformly, and each geometry is appended to the
    /// merged buffer under its material's slot with the node's accumulated
    /// world transform applied. Materials are deduplicated by equality, so
    /// meshes sharing a material share a slot. An empty tree yields an empty
    /// merged geometry.
    pub fn parse(mut root: SceneNode, settings: &ParseSettings) -> Result<Self> {
        let settings = settings.sanitized();
        root.set_orientation(&settings.orientation);
        if settings.scale != 1.0 {
            scale_meshes(&mut root, settings.scale);
        }

        let mut materials: Vec<Material> = Vec::new();
        let mut merged = MergedGeometry::new();
        root.traverse_with_transform(&Transform3D::identity(), &mut |world, node| {
            if let Some(mesh) = &node.mesh {
                let slot = match materials.iter().position(|m| *m == mesh.material) {
                    Some(slot) => slot,
                    None => {
                        materials.push(mesh.material.clone());
                        materials.len() - 1
                    }
                };
                merged.push(&mesh.geometry, world, slot);
            }
        });

        Ok(Self {
            name: root.name.clone(),
            root,
            materials,
            merged,
        })
    }

    /// Total number of meshes in the parsed tree
    pub fn mesh_count(&self) -> usize {
        self.root.mesh_count()
    }

    /// The slot assigned to a material during parsing, if any
    pub fn material_slot(&self, material: &Material) -> Option<usize> {
        self.materials.iter().position(|m| m == material)
    }

    /// Check if the model contained no geometry
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

fn scale_meshes(node: &mut SceneNode, scale: f32) {
    if let Some(mesh) = &mut node.mesh {
        mesh.geometry.scale(scale);
    }
    for child in &mut node.children {
        scale_meshes(child, scale);
    }
}

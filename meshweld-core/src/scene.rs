//! Scene-graph nodes
//!
//! A loaded model is a tree of nodes; every node carries a local transform
//! and optionally a mesh (geometry plus material).

use crate::geometry::Geometry;
use crate::material::Material;
use crate::transform::Transform3D;
use nalgebra::{Matrix4, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A geometry paired with its material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

/// A node of a loaded scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    /// Transform relative to the parent node
    pub transform: Transform3D,
    pub mesh: Option<Mesh>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform3D::identity(),
            mesh: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node carrying a mesh
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            transform: Transform3D::identity(),
            mesh: Some(mesh),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Total number of meshes in this subtree
    pub fn mesh_count(&self) -> usize {
        let own = usize::from(self.mesh.is_some());
        own + self.children.iter().map(SceneNode::mesh_count).sum::<usize>()
    }

    /// Visit every node depth-first, parents before children
    pub fn traverse<F: FnMut(&SceneNode)>(&self, visitor: &mut F) {
        visitor(self);
        for child in &self.children {
            child.traverse(visitor);
        }
    }

    /// Visit every node depth-first with its accumulated world transform
    pub fn traverse_with_transform<F: FnMut(&Transform3D, &SceneNode)>(
        &self,
        parent: &Transform3D,
        visitor: &mut F,
    ) {
        let world = parent.compose(self.transform);
        visitor(&world, self);
        for child in &self.children {
            child.traverse_with_transform(&world, visitor);
        }
    }

    /// Replace the rotation part of the local transform, keeping translation
    /// and scale
    ///
    /// This mirrors re-orienting a loaded root to the world's up axis: the
    /// transform is recomposed as translation * orientation * scale, so a
    /// loader-produced root scale survives the swap.
    pub fn set_orientation(&mut self, orientation: &UnitQuaternion<f32>) {
        let matrix = &self.transform.matrix;
        let translation = matrix.fixed_view::<3, 1>(0, 3).into_owned();
        let scale = Vector3::new(
            matrix.fixed_view::<3, 1>(0, 0).norm(),
            matrix.fixed_view::<3, 1>(0, 1).norm(),
            matrix.fixed_view::<3, 1>(0, 2).norm(),
        );
        let mut rebuilt = orientation.to_homogeneous() * Matrix4::new_nonuniform_scaling(&scale);
        rebuilt.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
        self.transform = Transform3D::from(rebuilt);
    }
}

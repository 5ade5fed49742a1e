//! Geometry buffers and merging

use crate::point::*;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};

/// An indexed triangle geometry with optional per-vertex attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub positions: Vec<Point3f>,
    pub normals: Option<Vec<Vector3f>>,
    pub tex_coords: Option<Vec<[f32; 2]>>,
    pub faces: Vec<[usize; 3]>,
}

impl Geometry {
    /// Create a new empty geometry
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: None,
            tex_coords: None,
            faces: Vec::new(),
        }
    }

    /// Create a geometry from positions and faces
    pub fn from_positions_and_faces(positions: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            positions,
            normals: None,
            tex_coords: None,
            faces,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the geometry is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Uniformly scale all positions in place
    pub fn scale(&mut self, factor: f32) {
        for position in &mut self.positions {
            position.coords *= factor;
        }
    }

    /// Apply a transformation to all positions, and its rotation part to the
    /// normals (renormalized)
    pub fn apply_transform(&mut self, transform: &Transform3D) {
        for position in &mut self.positions {
            *position = transform.transform_point(position);
        }
        if let Some(normals) = &mut self.normals {
            for normal in normals.iter_mut() {
                let rotated = transform.transform_vector(normal);
                *normal = rotated.try_normalize(1e-12).unwrap_or(rotated);
            }
        }
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.positions.len() {
            self.normals = Some(normals);
        }
    }

    /// Set texture coordinates
    pub fn set_tex_coords(&mut self, tex_coords: Vec<[f32; 2]>) {
        if tex_coords.len() == self.positions.len() {
            self.tex_coords = Some(tex_coords);
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

/// A contiguous face range of a merged geometry drawn with one material slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryGroup {
    /// First face index of the range
    pub start: usize,
    /// Number of faces in the range
    pub count: usize,
    /// Index into the parsed model's material list
    pub material_slot: usize,
}

/// A single geometry buffer assembled from many meshes, grouped by material slot
///
/// Groups are contiguous and non-overlapping and together cover every face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MergedGeometry {
    pub geometry: Geometry,
    pub groups: Vec<GeometryGroup>,
}

impl MergedGeometry {
    /// Create a new empty merged geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformed copy of `source` under the given material slot
    ///
    /// Faces are reindexed against the combined vertex buffer. Consecutive
    /// pushes with the same slot extend the last group.
    pub fn push(&mut self, source: &Geometry, transform: &Transform3D, material_slot: usize) {
        let vertex_offset = self.geometry.positions.len();
        let face_start = self.geometry.faces.len();

        let mut part = source.clone();
        part.apply_transform(transform);

        self.geometry.positions.extend(part.positions);
        self.geometry
            .faces
            .extend(part.faces.iter().map(|f| {
                [f[0] + vertex_offset, f[1] + vertex_offset, f[2] + vertex_offset]
            }));

        // attributes stay aligned with positions; meshes missing an attribute
        // that earlier meshes carried get a filled placeholder
        let total = self.geometry.positions.len();
        let default_normal = Vector3f::new(0.0, 0.0, 1.0);
        if let Some(normals) = part.normals {
            let merged = self
                .geometry
                .normals
                .get_or_insert_with(|| vec![default_normal; vertex_offset]);
            merged.extend(normals);
        } else if let Some(merged) = &mut self.geometry.normals {
            merged.resize(total, default_normal);
        }
        if let Some(tex_coords) = part.tex_coords {
            let merged = self
                .geometry
                .tex_coords
                .get_or_insert_with(|| vec![[0.0, 0.0]; vertex_offset]);
            merged.extend(tex_coords);
        } else if let Some(merged) = &mut self.geometry.tex_coords {
            merged.resize(total, [0.0, 0.0]);
        }

        let face_count = self.geometry.faces.len() - face_start;
        match self.groups.last_mut() {
            Some(last) if last.material_slot == material_slot => last.count += face_count,
            _ => self.groups.push(GeometryGroup {
                start: face_start,
                count: face_count,
                material_slot,
            }),
        }
    }

    /// Flat `[x, y, z, x, y, z, ...]` view over the merged positions
    pub fn position_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.geometry.positions)
    }

    /// Check if the merged geometry is empty
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }
}

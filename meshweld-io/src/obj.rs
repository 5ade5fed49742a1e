//! Wavefront OBJ format support (.obj with optional .mtl)

use crate::ModelReader;
use log::warn;
use meshweld_core::{
    Color, Error, Geometry, Material, MaterialKind, Mesh, Point3f, Result, SceneNode, Vector3f,
};
use std::path::Path;

pub struct ObjReader;

impl ModelReader for ObjReader {
    fn read_model<P: AsRef<Path>>(path: P) -> Result<SceneNode> {
        let path = path.as_ref();
        let (models, materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)
            .map_err(|e| Error::InvalidData(format!("failed to load {}: {}", path.display(), e)))?;

        // a broken or missing MTL degrades to default materials
        let materials: Vec<Material> = match materials {
            Ok(materials) => materials.iter().map(convert_material).collect(),
            Err(e) => {
                warn!("could not load materials for {}: {}", path.display(), e);
                Vec::new()
            }
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        let mut root = SceneNode::new(stem);
        for model in &models {
            let geometry = convert_mesh(&model.mesh);
            if geometry.is_empty() {
                warn!("skipping empty OBJ model {:?} in {}", model.name, path.display());
                continue;
            }
            let material = model
                .mesh
                .material_id
                .and_then(|id| materials.get(id).cloned())
                .unwrap_or_default();
            root.add_child(SceneNode::with_mesh(
                model.name.clone(),
                Mesh::new(geometry, material),
            ));
        }
        Ok(root)
    }
}

fn convert_mesh(mesh: &tobj::Mesh) -> Geometry {
    let positions: Vec<Point3f> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Point3f::new(p[0], p[1], p[2]))
        .collect();
    let faces: Vec<[usize; 3]> = mesh
        .indices
        .chunks_exact(3)
        .map(|c| [c[0] as usize, c[1] as usize, c[2] as usize])
        .collect();

    let mut geometry = Geometry::from_positions_and_faces(positions, faces);
    if !mesh.normals.is_empty() {
        geometry.set_normals(
            mesh.normals
                .chunks_exact(3)
                .map(|n| Vector3f::new(n[0], n[1], n[2]))
                .collect(),
        );
    }
    if !mesh.texcoords.is_empty() {
        geometry.set_tex_coords(mesh.texcoords.chunks_exact(2).map(|t| [t[0], t[1]]).collect());
    }
    geometry
}

fn convert_material(material: &tobj::Material) -> Material {
    let opacity = material.dissolve.unwrap_or(1.0);
    let kind = match material.illumination_model {
        Some(0) => MaterialKind::Basic,
        Some(1) | None => MaterialKind::Lambert,
        Some(_) => MaterialKind::Phong,
    };
    Material {
        name: material.name.clone(),
        kind,
        color: material.diffuse.map(Color::from).unwrap_or_default(),
        opacity,
        transparent: opacity < 1.0,
        ..Default::default()
    }
}

//! glTF 2.0 format support (.gltf and .glb)

use crate::ModelReader;
use log::warn;
use meshweld_core::{
    Color, Error, Geometry, Material, MaterialKind, Mesh, Result, SceneNode, Side, Transform3D,
    Vector3f,
};
use nalgebra::{Matrix4, Point3};
use std::path::Path;

pub struct GltfReader;

impl ModelReader for GltfReader {
    fn read_model<P: AsRef<Path>>(path: P) -> Result<SceneNode> {
        let (document, buffers, _images) =
            gltf::import(path.as_ref()).map_err(|e| Error::InvalidData(e.to_string()))?;

        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or_else(|| Error::InvalidData("glTF document contains no scene".into()))?;

        let materials: Vec<Material> = document.materials().map(convert_material).collect();

        let mut roots = Vec::new();
        for node in scene.nodes() {
            roots.push(convert_node(&node, &buffers, &materials)?);
        }

        // single-root scenes keep their root; anything else hangs under a container
        if roots.len() == 1 {
            Ok(roots.into_iter().next().unwrap_or_else(|| SceneNode::new("")))
        } else {
            let mut root = SceneNode::new(scene.name().unwrap_or("").to_string());
            root.children = roots;
            Ok(root)
        }
    }
}

fn convert_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    materials: &[Material],
) -> Result<SceneNode> {
    let mut out = SceneNode::new(node.name().unwrap_or("").to_string());
    out.transform = Transform3D::from(Matrix4::from(node.transform().matrix()));

    if let Some(mesh) = node.mesh() {
        let mesh_name = mesh.name().unwrap_or("").to_string();
        let mut converted = Vec::new();
        for (index, primitive) in mesh.primitives().enumerate() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                warn!(
                    "skipping primitive {} of mesh {:?}: mode {:?} is not triangles",
                    index,
                    mesh_name,
                    primitive.mode()
                );
                continue;
            }
            let geometry = convert_primitive(&primitive, buffers)?;
            let material = primitive
                .material()
                .index()
                .and_then(|i| materials.get(i).cloned())
                .unwrap_or_default();
            converted.push((index, Mesh::new(geometry, material)));
        }

        // a node with one primitive is itself the mesh, like a scene-graph
        // Mesh node; multi-primitive meshes fan out into children
        if converted.len() == 1 {
            out.mesh = converted.pop().map(|(_, mesh)| mesh);
        } else {
            for (index, mesh) in converted {
                out.add_child(SceneNode::with_mesh(
                    format!("{}.{}", mesh_name, index),
                    mesh,
                ));
            }
        }
    }

    for child in node.children() {
        out.add_child(convert_node(&child, buffers, materials)?);
    }
    Ok(out)
}

fn convert_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
) -> Result<Geometry> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

    let positions: Vec<Point3<f32>> = reader
        .read_positions()
        .ok_or_else(|| Error::InvalidData("glTF primitive has no POSITION attribute".into()))?
        .map(Point3::from)
        .collect();

    let faces: Vec<[usize; 3]> = match reader.read_indices() {
        Some(indices) => {
            let indices: Vec<u32> = indices.into_u32().collect();
            indices
                .chunks_exact(3)
                .map(|c| [c[0] as usize, c[1] as usize, c[2] as usize])
                .collect()
        }
        None => (0..positions.len() / 3)
            .map(|i| [i * 3, i * 3 + 1, i * 3 + 2])
            .collect(),
    };

    let mut geometry = Geometry::from_positions_and_faces(positions, faces);
    if let Some(normals) = reader.read_normals() {
        geometry.set_normals(normals.map(Vector3f::from).collect());
    }
    if let Some(tex_coords) = reader.read_tex_coords(0) {
        geometry.set_tex_coords(tex_coords.into_f32().collect());
    }
    Ok(geometry)
}

fn convert_material(material: gltf::Material) -> Material {
    let pbr = material.pbr_metallic_roughness();
    let base_color = pbr.base_color_factor();
    let opacity = base_color[3];

    let mut out = Material {
        name: material.name().unwrap_or("").to_string(),
        kind: if material.unlit() {
            MaterialKind::Basic
        } else {
            MaterialKind::Lambert
        },
        color: Color::new(base_color[0], base_color[1], base_color[2]),
        emissive: Color::from(material.emissive_factor()),
        opacity,
        ..Default::default()
    };

    match material.alpha_mode() {
        gltf::material::AlphaMode::Blend => {
            out.transparent = true;
        }
        gltf::material::AlphaMode::Mask => {
            out.alpha_test = material.alpha_cutoff().unwrap_or(0.5);
        }
        gltf::material::AlphaMode::Opaque => {}
    }
    if opacity < 1.0 {
        out.transparent = true;
    }
    if material.double_sided() {
        out.side = Side::Double;
    }
    out
}

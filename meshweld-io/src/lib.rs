//! Model loading for meshweld
//!
//! This crate reads scene-graph models from glTF/GLB and Wavefront OBJ files
//! and hands them to `meshweld-core` for normalization and merging.

pub mod gltf;
pub mod obj;

pub use gltf::GltfReader;
pub use obj::ObjReader;

use log::debug;
use meshweld_core::{Error, ParsedModel, ParseSettings, Result, SceneNode};
use std::path::Path;

/// Trait for reading scene-graph models from files
pub trait ModelReader {
    fn read_model<P: AsRef<Path>>(path: P) -> Result<SceneNode>;
}

/// Auto-detect format by extension and read a model
pub fn read_model<P: AsRef<Path>>(path: P) -> Result<SceneNode> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("gltf") | Some("glb") => gltf::GltfReader::read_model(path),
        Some("obj") => obj::ObjReader::read_model(path),
        _ => Err(Error::UnsupportedFormat(format!(
            "unsupported model format: {:?}",
            path.extension()
        ))),
    }
}

/// Read a model and flatten it with the given settings
///
/// The parsed model is named after the scene root, falling back to the file
/// stem when the root carries no name.
pub fn load_parsed<P: AsRef<Path>>(path: P, settings: &ParseSettings) -> Result<ParsedModel> {
    let path = path.as_ref();
    let mut root = read_model(path)?;
    if root.name.is_empty() {
        root.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
    }
    let parsed = ParsedModel::parse(root, settings)?;
    debug!(
        "parsed {}: {} meshes, {} materials, {} merged faces",
        path.display(),
        parsed.mesh_count(),
        parsed.materials.len(),
        parsed.merged.geometry.face_count()
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meshweld_core::{MaterialKind, Side, UnitQuaternion};
    use std::fs;

    const TRIANGLE_GLTF: &str = r#"{
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"name": "tri_scene", "nodes": [0]}],
        "nodes": [{"mesh": 0, "name": "tri"}],
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}, "material": 0}]}],
        "materials": [{
            "name": "red",
            "alphaMode": "BLEND",
            "doubleSided": true,
            "pbrMetallicRoughness": {"baseColorFactor": [1.0, 0.0, 0.0, 0.5]}
        }],
        "buffers": [{
            "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA",
            "byteLength": 36
        }],
        "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}],
        "accessors": [{
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 0.0]
        }]
    }"#;

    // one triangle, two primitives: a cutout material and an unlit one
    const MASKED_UNLIT_GLTF: &str = r#"{
        "asset": {"version": "2.0"},
        "extensionsUsed": ["KHR_materials_unlit"],
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [{"mesh": 0, "name": "leaf"}],
        "meshes": [{"name": "leaf_mesh", "primitives": [
            {"attributes": {"POSITION": 0}, "material": 0},
            {"attributes": {"POSITION": 0}, "material": 1}
        ]}],
        "materials": [
            {
                "name": "cutout",
                "alphaMode": "MASK",
                "alphaCutoff": 0.4,
                "pbrMetallicRoughness": {"baseColorFactor": [1.0, 1.0, 1.0, 1.0]}
            },
            {
                "name": "flat",
                "extensions": {"KHR_materials_unlit": {}},
                "pbrMetallicRoughness": {"baseColorFactor": [0.0, 1.0, 0.0, 1.0]}
            }
        ],
        "buffers": [{
            "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA",
            "byteLength": 36
        }],
        "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}],
        "accessors": [{
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 0.0]
        }]
    }"#;

    const SAMPLE_MTL: &str = "newmtl red_matte\nKd 1.0 0.0 0.0\nd 1.0\nillum 1\n\nnewmtl flat_green\nKd 0.0 1.0 0.0\nd 0.5\nillum 0\n";

    const SAMPLE_OBJ: &str = "mtllib weld_sample.mtl\nv 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nv 0.0 0.0 1.0\ng first\nusemtl red_matte\nf 1 2 3\ng second\nusemtl flat_green\nf 1 3 4\n";

    #[test]
    fn test_read_obj_model() {
        fs::write("weld_sample.mtl", SAMPLE_MTL).unwrap();
        fs::write("weld_sample.obj", SAMPLE_OBJ).unwrap();

        let root = read_model("weld_sample.obj").unwrap();
        assert_eq!(root.name, "weld_sample");
        assert_eq!(root.mesh_count(), 2);

        let first = root.children[0].mesh.as_ref().unwrap();
        assert_eq!(first.material.name, "red_matte");
        assert_eq!(first.material.kind, MaterialKind::Lambert);
        assert_relative_eq!(first.material.color.r, 1.0);
        assert_eq!(first.geometry.face_count(), 1);

        let second = root.children[1].mesh.as_ref().unwrap();
        assert_eq!(second.material.kind, MaterialKind::Basic);
        assert!(second.material.transparent);
        assert_relative_eq!(second.material.opacity, 0.5);

        let _ = fs::remove_file("weld_sample.obj");
        let _ = fs::remove_file("weld_sample.mtl");
    }

    #[test]
    fn test_load_parsed_obj_with_scale() {
        fs::write("weld_scaled.mtl", SAMPLE_MTL).unwrap();
        fs::write(
            "weld_scaled.obj",
            "mtllib weld_scaled.mtl\nv 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nusemtl red_matte\nf 1 2 3\n",
        )
        .unwrap();

        let settings = ParseSettings::new(UnitQuaternion::identity(), 2.0);
        let parsed = load_parsed("weld_scaled.obj", &settings).unwrap();
        assert_eq!(parsed.name, "weld_scaled");
        assert_eq!(parsed.materials.len(), 1);
        assert_eq!(parsed.merged.groups.len(), 1);

        // vertex (1, 0, 0) scaled by 2
        let buffer = parsed.merged.position_buffer();
        assert_relative_eq!(buffer[3], 2.0);

        let _ = fs::remove_file("weld_scaled.obj");
        let _ = fs::remove_file("weld_scaled.mtl");
    }

    #[test]
    fn test_read_gltf_model() {
        fs::write("weld_tri.gltf", TRIANGLE_GLTF).unwrap();

        let root = read_model("weld_tri.gltf").unwrap();
        assert_eq!(root.name, "tri");
        assert_eq!(root.mesh_count(), 1);

        let mesh = root.mesh.as_ref().unwrap();
        assert_eq!(mesh.geometry.vertex_count(), 3);
        // no indices: faces come from sequential triples
        assert_eq!(mesh.geometry.faces, vec![[0, 1, 2]]);

        assert_eq!(mesh.material.name, "red");
        assert_relative_eq!(mesh.material.color.r, 1.0);
        assert_relative_eq!(mesh.material.opacity, 0.5);
        assert!(mesh.material.transparent);
        assert_eq!(mesh.material.side, Side::Double);

        let _ = fs::remove_file("weld_tri.gltf");
    }

    #[test]
    fn test_gltf_masked_and_unlit_materials() {
        fs::write("weld_leaf.gltf", MASKED_UNLIT_GLTF).unwrap();

        let root = read_model("weld_leaf.gltf").unwrap();
        // two primitives fan out into child mesh nodes
        assert!(root.mesh.is_none());
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "leaf_mesh.0");

        let cutout = &root.children[0].mesh.as_ref().unwrap().material;
        assert_eq!(cutout.kind, MaterialKind::Lambert);
        assert_relative_eq!(cutout.alpha_test, 0.4);
        assert!(!cutout.transparent);

        let flat = &root.children[1].mesh.as_ref().unwrap().material;
        assert_eq!(flat.name, "flat");
        assert_eq!(flat.kind, MaterialKind::Basic);
        assert_relative_eq!(flat.color.g, 1.0);

        let _ = fs::remove_file("weld_leaf.gltf");
    }

    #[test]
    fn test_gltf_multi_root_scene_gets_container() {
        fs::write(
            "weld_pair.gltf",
            TRIANGLE_GLTF.replace(
                r#""scenes": [{"name": "tri_scene", "nodes": [0]}],
        "nodes": [{"mesh": 0, "name": "tri"}],"#,
                r#""scenes": [{"name": "tri_scene", "nodes": [0, 1]}],
        "nodes": [{"mesh": 0, "name": "tri"}, {"mesh": 0, "name": "tri_too"}],"#,
            ),
        )
        .unwrap();

        let root = read_model("weld_pair.gltf").unwrap();
        assert_eq!(root.name, "tri_scene");
        assert!(root.mesh.is_none());
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.mesh_count(), 2);

        let _ = fs::remove_file("weld_pair.gltf");
    }

    #[test]
    fn test_obj_specular_material_is_phong() {
        fs::write(
            "weld_shiny.mtl",
            "newmtl specular\nKd 0.2 0.2 0.8\nKs 0.9 0.9 0.9\nNs 64\nillum 2\n",
        )
        .unwrap();
        fs::write(
            "weld_shiny.obj",
            "mtllib weld_shiny.mtl\nv 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nusemtl specular\nf 1 2 3\n",
        )
        .unwrap();

        let root = read_model("weld_shiny.obj").unwrap();
        let material = &root.children[0].mesh.as_ref().unwrap().material;
        assert_eq!(material.name, "specular");
        assert_eq!(material.kind, MaterialKind::Phong);

        let _ = fs::remove_file("weld_shiny.obj");
        let _ = fs::remove_file("weld_shiny.mtl");
    }

    #[test]
    fn test_load_parsed_gltf() {
        fs::write("weld_tri_parsed.gltf", TRIANGLE_GLTF).unwrap();

        let parsed = load_parsed("weld_tri_parsed.gltf", &ParseSettings::default()).unwrap();
        assert_eq!(parsed.name, "tri");
        assert_eq!(parsed.merged.geometry.face_count(), 1);
        assert_eq!(parsed.merged.groups[0].material_slot, 0);
        assert_eq!(parsed.materials[0].name, "red");

        let _ = fs::remove_file("weld_tri_parsed.gltf");
    }

    #[test]
    fn test_unsupported_format() {
        let result = read_model("model.stl");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));

        // no extension at all
        let result = read_model("model");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(read_model("does_not_exist.obj").is_err());
        assert!(read_model("does_not_exist.gltf").is_err());
    }
}

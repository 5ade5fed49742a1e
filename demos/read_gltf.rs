//! Load a glTF/GLB model given on the command line and print its layout

use meshweld_core::{ParseSettings, Transform3D};
use meshweld_io::{read_model, load_parsed};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: read_gltf <model.gltf|model.glb>"))?;

    let root = read_model(&path)?;
    println!("scene tree:");
    root.traverse_with_transform(&Transform3D::identity(), &mut |_, node| {
        let kind = if node.mesh.is_some() { "mesh" } else { "node" };
        println!("  [{}] {:?} ({} children)", kind, node.name, node.children.len());
    });

    let parsed = load_parsed(&path, &ParseSettings::default())?;
    println!(
        "merged: {} vertices, {} faces, {} material groups",
        parsed.merged.geometry.vertex_count(),
        parsed.merged.geometry.face_count(),
        parsed.merged.groups.len()
    );
    Ok(())
}

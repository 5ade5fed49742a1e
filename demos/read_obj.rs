//! Load a Wavefront OBJ model and flatten it
//!
//! Writes a small sample OBJ/MTL pair, loads it through the extension
//! dispatcher, and prints the merged result.

use meshweld_core::{ParseSettings, UnitQuaternion};
use meshweld_io::load_parsed;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    create_sample_files()?;

    // z-up export re-oriented to y-up, shrunk to a tenth
    let orientation = UnitQuaternion::from_euler_angles(-std::f32::consts::FRAC_PI_2, 0.0, 0.0);
    let settings = ParseSettings::new(orientation, 0.1);

    let parsed = load_parsed("demo_sample.obj", &settings)?;

    println!("model:     {}", parsed.name);
    println!("meshes:    {}", parsed.mesh_count());
    println!("vertices:  {}", parsed.merged.geometry.vertex_count());
    println!("faces:     {}", parsed.merged.geometry.face_count());
    println!("materials: {}", parsed.materials.len());
    for group in &parsed.merged.groups {
        println!(
            "  faces {}..{} -> {}",
            group.start,
            group.start + group.count,
            parsed.materials[group.material_slot].name
        );
    }

    cleanup_sample_files();
    Ok(())
}

fn create_sample_files() -> anyhow::Result<()> {
    let mtl_content = r#"newmtl red_matte
Kd 0.8 0.1 0.1
d 1.0
illum 1

newmtl flat_green
Kd 0.1 0.6 0.2
d 0.7
illum 0
"#;
    std::fs::write("demo_sample.mtl", mtl_content)?;

    let obj_content = r#"mtllib demo_sample.mtl
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.5 0.866 0.0
v 0.5 0.289 0.816
g pyramid
usemtl red_matte
f 1 2 3
f 1 4 2
f 2 4 3
f 3 4 1
g fin
usemtl flat_green
f 1 2 4
"#;
    std::fs::write("demo_sample.obj", obj_content)?;
    Ok(())
}

fn cleanup_sample_files() {
    let _ = std::fs::remove_file("demo_sample.obj");
    let _ = std::fs::remove_file("demo_sample.mtl");
}

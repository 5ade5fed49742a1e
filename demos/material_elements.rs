//! Render sample material descriptors as declarative elements

use meshweld_core::{Color, Material, MaterialKind};
use meshweld_elements::create_material;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut glass = Material::lambert("glass", Color::new(0.1, 0.6, 0.3));
    glass.opacity = 0.7;
    glass.transparent = true;

    let mut shiny = Material::default();
    shiny.name = "shiny".into();
    shiny.kind = MaterialKind::Phong;

    let materials = [
        Material::basic("flat_red", Color::new(1.0, 0.0, 0.0)),
        glass,
        shiny,
    ];

    for material in &materials {
        match create_material(material) {
            Some(element) => println!("{}: {}", material.name, element),
            None => println!("{}: no element for {:?} materials", material.name, material.kind),
        }
    }
    Ok(())
}

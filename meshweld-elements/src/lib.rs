//! Declarative UI elements for material descriptors
//!
//! Materials are rendered as element descriptions the way a declarative
//! component tree consumes them: a tag name plus a flat attribute list.
//! Only the material kinds a component library can display get an element;
//! everything else renders as `None`.

pub mod element;

pub use element::{Attr, AttrValue, Element};

use meshweld_core::{Material, MaterialKind};

/// Render a material description as a UI element
///
/// `Basic` materials carry only their color; `Lambert` materials carry the
/// full attribute set. Other kinds are not yet representable and yield
/// `None`.
pub fn create_material(material: &Material) -> Option<Element> {
    match material.kind {
        MaterialKind::Basic => Some(
            Element::new("meshBasicMaterial").with_attr("color", AttrValue::Color(material.color.to_hex())),
        ),
        MaterialKind::Lambert => Some(
            Element::new("meshLambertMaterial")
                .with_attr("transparent", AttrValue::Bool(material.transparent))
                .with_attr("alphaTest", AttrValue::Number(material.alpha_test))
                .with_attr("side", AttrValue::Str(material.side.as_str()))
                .with_attr("opacity", AttrValue::Number(material.opacity))
                .with_attr("visible", AttrValue::Bool(material.visible))
                .with_attr("color", AttrValue::Color(material.color.to_hex()))
                .with_attr("emissive", AttrValue::Color(material.emissive.to_hex()))
                .with_attr("wireframe", AttrValue::Bool(material.wireframe))
                .with_attr("wireframeLinewidth", AttrValue::Number(material.wireframe_linewidth)),
        ),
        _ => None,
    }
}

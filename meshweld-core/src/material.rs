//! Material descriptors
//!
//! Materials here are plain descriptions handed through to the element
//! renderer; no shading happens in this workspace.

use crate::point::Color;
use serde::{Deserialize, Serialize};

/// Which faces of a surface the material applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Front,
    Back,
    Double,
}

impl Side {
    /// The attribute value used when rendering the material as an element
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
            Side::Double => "double",
        }
    }
}

/// The shading family of a material
///
/// Loaders map their source formats onto these kinds; the element renderer
/// only handles `Basic` and `Lambert` and skips the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Unlit, flat color
    Basic,
    /// Diffuse-lit
    Lambert,
    /// Specular-lit; loaded but not yet renderable as an element
    Phong,
}

/// A material description attached to a mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub kind: MaterialKind,
    pub color: Color,
    pub emissive: Color,
    pub opacity: f32,
    pub transparent: bool,
    pub alpha_test: f32,
    pub side: Side,
    pub visible: bool,
    pub wireframe: bool,
    pub wireframe_linewidth: f32,
}

impl Material {
    /// An unlit material with the given color
    pub fn basic(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Basic,
            color,
            ..Default::default()
        }
    }

    /// A diffuse-lit material with the given color
    pub fn lambert(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Lambert,
            color,
            ..Default::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: MaterialKind::Lambert,
            color: Color::WHITE,
            emissive: Color::BLACK,
            opacity: 1.0,
            transparent: false,
            alpha_test: 0.0,
            side: Side::Front,
            visible: true,
            wireframe: false,
            wireframe_linewidth: 1.0,
        }
    }
}

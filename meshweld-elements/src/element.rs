//! Element and attribute types

use serde::Serialize;
use std::fmt;

/// An attribute value of a declarative element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AttrValue {
    Bool(bool),
    Number(f32),
    /// A `#rrggbb` color string
    Color(String),
    Str(&'static str),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(value) => write!(f, "{{{}}}", value),
            AttrValue::Number(value) => write!(f, "{{{}}}", value),
            AttrValue::Color(value) => write!(f, "\"{}\"", value),
            AttrValue::Str(value) => write!(f, "\"{}\"", value),
        }
    }
}

/// A named attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attr {
    pub name: &'static str,
    pub value: AttrValue,
}

/// A self-closing element of a declarative component tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<Attr>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &'static str, value: AttrValue) -> Self {
        self.attrs.push(Attr { name, value });
        self
    }

    /// Look up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|a| a.name == name).map(|a| &a.value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for attr in &self.attrs {
            write!(f, " {}={}", attr.name, attr.value)?;
        }
        write!(f, " />")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_value_kinds() {
        let element = Element::new("meshLambertMaterial")
            .with_attr("transparent", AttrValue::Bool(false))
            .with_attr("opacity", AttrValue::Number(0.5))
            .with_attr("color", AttrValue::Color("#ffffff".into()))
            .with_attr("side", AttrValue::Str("double"));
        assert_eq!(
            element.to_string(),
            r##"<meshLambertMaterial transparent={false} opacity={0.5} color="#ffffff" side="double" />"##
        );
    }

    #[test]
    fn test_attr_lookup() {
        let element = Element::new("meshBasicMaterial").with_attr("color", AttrValue::Color("#123456".into()));
        assert!(element.attr("color").is_some());
        assert!(element.attr("opacity").is_none());
    }
}

//! Core types for the generation domain
//!
//! The specialization tree is the only data handed to the template. Field names
//! are serialized capitalized (`Name`, `Type`, `X`, `Y`, `Z`) so templates read
//! `{% for x in X %}{{ x.Name }}{% endfor %}`.

use serde::Serialize;
use std::sync::Arc;

use crate::generation::utils::derive_name;

/// A concrete type and the identifier fragment derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    /// Identifier form of the type: "int" -> "Int", "[]byte" -> "ByteSlice"
    #[serde(rename = "Name")]
    pub name: String,
    /// Textual type as supplied: "int", "float32", "foo.Baz"
    #[serde(rename = "Type")]
    pub ty: String,
}

impl TypeSpec {
    /// Build a spec from a type expression, deriving its identifier
    pub fn new(ty: &str) -> Self {
        Self {
            name: derive_name(ty),
            ty: ty.to_string(),
        }
    }
}

/// Innermost dimension; has no children
pub type ZEntry = TypeSpec;

/// Middle dimension, carrying the full Z list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YEntry {
    #[serde(flatten)]
    pub spec: TypeSpec,
    #[serde(rename = "Z")]
    pub z: Arc<[ZEntry]>,
}

/// Outer dimension, carrying the full Y list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XEntry {
    #[serde(flatten)]
    pub spec: TypeSpec,
    #[serde(rename = "Y")]
    pub y: Arc<[YEntry]>,
}

/// Top-level value passed to the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecializationTree {
    /// Base form of the template filename: "foo/bar.go.tmpl" -> "bar"
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "X")]
    pub x: Vec<XEntry>,
}

impl SpecializationTree {
    /// Number of leaves in the cross-product.
    ///
    /// Counts the deepest populated level, so a tree without Y reports `|X|`.
    pub fn combinations(&self) -> usize {
        self.x
            .iter()
            .map(|x| {
                if x.y.is_empty() {
                    1
                } else {
                    x.y.iter().map(|y| y.z.len().max(1)).sum()
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_spec_derives_name() {
        let spec = TypeSpec::new("[]byte");
        assert_eq!(spec.name, "ByteSlice");
        assert_eq!(spec.ty, "[]byte");
    }

    #[test]
    fn test_tree_serializes_with_template_field_names() {
        let z: Arc<[ZEntry]> = vec![TypeSpec::new("float64")].into();
        let y: Arc<[YEntry]> = vec![YEntry {
            spec: TypeSpec::new("foo.Baz"),
            z,
        }]
        .into();
        let tree = SpecializationTree {
            name: "vec".to_string(),
            x: vec![XEntry {
                spec: TypeSpec::new("int"),
                y,
            }],
        };

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            json!({
                "Name": "vec",
                "X": [{
                    "Name": "Int",
                    "Type": "int",
                    "Y": [{
                        "Name": "Foo_Baz",
                        "Type": "foo.Baz",
                        "Z": [{ "Name": "Float64", "Type": "float64" }]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_combinations_counts_deepest_level() {
        let tree = SpecializationTree {
            name: "t".to_string(),
            x: vec![
                XEntry {
                    spec: TypeSpec::new("a"),
                    y: Arc::from(Vec::<YEntry>::new()),
                },
                XEntry {
                    spec: TypeSpec::new("b"),
                    y: Arc::from(Vec::<YEntry>::new()),
                },
            ],
        };
        assert_eq!(tree.combinations(), 2);
    }
}

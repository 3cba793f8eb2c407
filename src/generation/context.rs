//! Specialization context - builds the cross-product handed to the template

use std::sync::Arc;

use tracing::debug;

use crate::generation::{SpecializationTree, TypeSpec, XEntry, YEntry, ZEntry};

/// Builds the X × Y × Z tree from expanded type lists.
///
/// The Z entries are built once and shared by every Y entry, and the Y entries
/// are built once and shared by every X entry. A non-empty `z` is ignored when
/// `y` is empty since there is nothing for it to attach to.
///
/// # Examples
/// ```
/// use specialize::generation::build_tree;
///
/// let tree = build_tree("vec", &["int", "float32"], &["int8"], &["string"]);
/// assert_eq!(tree.x.len(), 2);
/// assert_eq!(tree.x[1].y[0].z[0].name, "String");
/// ```
pub fn build_tree<S: AsRef<str>>(
    name: impl Into<String>,
    x: &[S],
    y: &[S],
    z: &[S],
) -> SpecializationTree {
    let name = name.into();

    if y.is_empty() && !z.is_empty() {
        debug!(z = z.len(), "Ignoring Z types without Y types");
    }

    let ys: Arc<[YEntry]> = if y.is_empty() {
        Arc::from(Vec::<YEntry>::new())
    } else {
        let zs: Arc<[ZEntry]> = z.iter().map(|t| TypeSpec::new(t.as_ref())).collect();
        y.iter()
            .map(|t| YEntry {
                spec: TypeSpec::new(t.as_ref()),
                z: Arc::clone(&zs),
            })
            .collect()
    };

    let xs = x
        .iter()
        .map(|t| XEntry {
            spec: TypeSpec::new(t.as_ref()),
            y: Arc::clone(&ys),
        })
        .collect();

    let tree = SpecializationTree { name, x: xs };
    debug!(
        name = %tree.name,
        x = x.len(),
        y = ys.len(),
        combinations = tree.combinations(),
        "Built specialization tree"
    );
    tree
}

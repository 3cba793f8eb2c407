//! specialize - generate type-specialized code from a template
//!
//! A template is rendered once against the cross-product of up to three
//! comma-separated type lists, letting it emit one variant of its code per
//! combination of concrete types.
//!
//! ```
//! use specialize::generation::{build_tree, expand};
//!
//! let tree = build_tree("vec", &expand("int,float32"), &expand("integers"), &[]);
//! assert_eq!(tree.x.len(), 2);
//! assert_eq!(tree.x[0].y.len(), 10);
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;

//! Generation domain module - the specialization model
//!
//! Type lists are expanded (`expand`), each type gets an identifier fragment
//! (`utils::derive_name`) and the lists are combined into the X × Y × Z tree
//! (`context::build_tree`) that templates iterate over.

pub mod context;
pub mod expand;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use expand::{TypeMacro, describe_macros, expand, lookup_macro, macros};
pub use traits::*;
pub use types::*;
pub use utils::derive_name;

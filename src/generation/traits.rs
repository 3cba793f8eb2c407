//! Port interfaces for the generation domain

use crate::core::Result;
use crate::generation::SpecializationTree;

/// Renders a template source against a specialization tree
pub trait TemplateRenderer {
    /// Compile `source` and execute it with `tree` as the top-level value.
    ///
    /// `template_name` is only used in diagnostics.
    fn render(
        &self,
        template_name: &str,
        source: &str,
        tree: &SpecializationTree,
    ) -> Result<String>;
}

//! Tera-based template renderer implementation

use tera::{Context, Tera};
use tracing::debug;

use crate::core::{Error, Result};
use crate::generation::{SpecializationTree, TemplateRenderer};

/// Tera-based template renderer
pub struct TeraTemplateRenderer;

impl TeraTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(
        &self,
        template_name: &str,
        source: &str,
        tree: &SpecializationTree,
    ) -> Result<String> {
        // A fresh instance per render; generated code is never HTML-escaped
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_template(template_name, source)
            .map_err(|e| Error::template_parse(&e))?;

        let context = Context::from_serialize(tree).map_err(|e| Error::render(&e))?;

        let rendered = tera
            .render(template_name, &context)
            .map_err(|e| Error::render(&e))?;

        debug!(
            template = template_name,
            bytes = rendered.len(),
            "Rendered template"
        );
        Ok(rendered)
    }
}

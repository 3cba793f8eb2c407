//! Use case for specializing a template over a cross-product of types

use std::fs;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{OutputService, SpecializeRequest, SpecializeResponse, base_name};
use crate::core::{Error, Result};
use crate::generation::{TemplateRenderer, build_tree, expand};

/// Header written above every generated file
pub const GENERATED_HEADER: &str = "// File generated by specialize. Do not edit.\n\n";

/// Use case for rendering one template into one generated file
pub struct SpecializeUseCase {
    renderer: Arc<dyn TemplateRenderer>,
    output_service: Arc<dyn OutputService>,
}

impl SpecializeUseCase {
    pub fn new(
        renderer: Arc<dyn TemplateRenderer>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            renderer,
            output_service,
        }
    }

    pub fn execute(&self, request: SpecializeRequest) -> Result<SpecializeResponse> {
        // 1. Validate request
        request.validate()?;
        let input = request.require_input()?;
        let output_path = request.output_path()?;

        // 2. Expand type lists
        let x = expand(request.x.as_deref().unwrap_or_default());
        let y = expand(request.y.as_deref().unwrap_or_default());
        let z = expand(request.z.as_deref().unwrap_or_default());
        debug!(?x, ?y, ?z, "Expanded type lists");

        // 3. Build the cross-product
        let tree = build_tree(base_name(input), &x, &y, &z);

        // 4. Render
        let source = fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
        let template_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        let rendered = self.renderer.render(&template_name, &source, &tree)?;

        // 5. Write header and rendered code
        let mut content = String::with_capacity(GENERATED_HEADER.len() + rendered.len());
        content.push_str(GENERATED_HEADER);
        content.push_str(&rendered);
        self.output_service
            .write_output(&output_path, content.as_bytes())?;

        info!(
            input = %input.display(),
            output = %output_path.display(),
            combinations = tree.combinations(),
            "Specialized template"
        );

        Ok(SpecializeResponse {
            output_path,
            bytes_written: content.len(),
            combinations: tree.combinations(),
        })
    }
}

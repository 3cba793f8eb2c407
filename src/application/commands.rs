//! Data Transfer Objects for application layer

use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

/// Extension given to generated files when no output path is supplied
pub const DEFAULT_OUTPUT_EXTENSION: &str = "go";

/// Request to specialize one template
#[derive(Debug, Clone, Default)]
pub struct SpecializeRequest {
    /// Template file
    pub input: Option<PathBuf>,
    /// Destination file; defaults to `<input dir>/<base name>.go`
    pub output: Option<PathBuf>,
    /// Comma-separated X types
    pub x: Option<String>,
    /// Comma-separated Y types
    pub y: Option<String>,
    /// Comma-separated Z types, only used together with Y
    pub z: Option<String>,
}

impl SpecializeRequest {
    /// Checks that the required input file and X types were supplied.
    ///
    /// An empty value counts as missing.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_ref().is_none_or(|p| p.as_os_str().is_empty()) {
            return Err(Error::config("no template file"));
        }
        if self.x.as_deref().is_none_or(str::is_empty) {
            return Err(Error::config("no specialization types"));
        }
        Ok(())
    }

    /// Where the generated code is written
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(output) = self.output.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            return Ok(output.clone());
        }
        let input = self.require_input()?;
        Ok(default_output_path(input))
    }

    pub(crate) fn require_input(&self) -> Result<&Path> {
        self.input
            .as_deref()
            .ok_or_else(|| Error::config("no template file"))
    }
}

/// Response from a successful specialization
#[derive(Debug, Clone)]
pub struct SpecializeResponse {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub combinations: usize,
}

/// Base form of a template filename: `"foo/bar.go.tmpl"` -> `"bar"`.
///
/// Everything from the first `.` on is dropped, unless the name starts with
/// a `.`, in which case it is kept whole.
pub fn base_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    match name.find('.') {
        Some(index) if index > 0 => name[..index].to_string(),
        _ => name,
    }
}

/// Output path used when none is given: `"pkg/foo.go.tmpl"` -> `"pkg/foo.go"`
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = format!("{}.{DEFAULT_OUTPUT_EXTENSION}", base_name(input));
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

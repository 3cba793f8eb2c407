//! Error handling for the specialize code generator.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every variant corresponds to
//! one stage of the pipeline so the command line can report which stage failed.
//!
//! # Examples
//!
//! ```
//! use specialize::core::error::{Error, Result};
//!
//! fn requires_types(x: &str) -> Result<()> {
//!     if x.is_empty() {
//!         return Err(Error::config("no specialization types"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(requires_types("").is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for specialization operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for specialization operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument is missing or empty
    #[error("Configuration error: {0}")]
    Config(String),

    /// The template source could not be compiled
    #[error("template parse failed: {0}")]
    TemplateParse(String),

    /// The template compiled but failed while executing
    #[error("specialization failed: {0}")]
    Render(String),

    /// Reading the template or writing the output failed
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a template parse error from a tera error, keeping its cause chain
    pub fn template_parse(err: &tera::Error) -> Self {
        Self::TemplateParse(describe_chain(err))
    }

    /// Create a render error from a tera error, keeping its cause chain
    pub fn render(err: &tera::Error) -> Self {
        Self::Render(describe_chain(err))
    }

    /// Create an I/O error tied to the path it happened on
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error stems from invocation rather than processing
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Flattens an error and its sources into a single `a: b: c` line.
///
/// Tera keeps the useful diagnostic (line, column, missing variable) in the
/// source chain rather than in the top-level message.
fn describe_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

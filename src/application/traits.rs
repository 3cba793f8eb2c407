//! Port interfaces for the application layer

use std::path::Path;

use crate::core::Result;

/// Service for writing generated code to its destination
pub trait OutputService {
    /// Write `content` to `path`, replacing any existing file.
    ///
    /// On failure nothing is left at `path` that looks like a complete file.
    fn write_output(&self, path: &Path, content: &[u8]) -> Result<()>;
}

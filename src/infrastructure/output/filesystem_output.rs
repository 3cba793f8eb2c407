//! Filesystem-based output service implementation

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::application::OutputService;
use crate::core::{Error, Result};

/// Mode given to generated files on Unix
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Output service that writes generated code to the filesystem.
///
/// Content goes to a temporary file next to the destination which is then
/// renamed into place, so the destination is either the old file or the
/// complete new one.
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl OutputService for FileSystemOutputService {
    fn write_output(&self, path: &Path, content: &[u8]) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Create parent directory if needed
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
        file.write_all(content).map_err(|e| Error::io(path, e))?;
        file.flush().map_err(|e| Error::io(path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(OUTPUT_MODE);
            fs::set_permissions(file.path(), permissions).map_err(|e| Error::io(path, e))?;
        }

        file.persist(path).map_err(|e| Error::io(path, e.error))?;
        debug!(path = %path.display(), bytes = content.len(), "Wrote output");
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

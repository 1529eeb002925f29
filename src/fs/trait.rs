//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Read-side file operations used by the classifier and framework probes
///
/// Directory traversal does not go through this trait; the enumerator walks
/// the real tree because it has to follow the on-disk ignore files.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Read first N bytes of file (for `#!` detection)
    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>>;
}

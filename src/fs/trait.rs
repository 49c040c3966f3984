//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Lazy sequence of file paths produced by a walk
pub type FileWalk<'a> = Box<dyn Iterator<Item = Result<PathBuf>> + 'a>;

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read file contents as UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace file contents
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Delete a file. Returns `Ok(false)` when it was already gone.
    fn remove_file(&self, path: &Path) -> Result<bool>;

    /// Canonicalize a path
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Walk every regular file below `root` in file-name order.
    ///
    /// Directories (below the root) whose name is in `pruned_dirs` are not
    /// descended into.
    fn walk_files(&self, root: &Path, pruned_dirs: &[String]) -> FileWalk<'_>;
}

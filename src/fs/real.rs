use super::{FileSystem, FileWalk};
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).context(format!("Failed to write file {:?}", path))
    }

    fn remove_file(&self, path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err).context(format!("Failed to delete file {:?}", path)),
        }
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize()
            .context(format!("Failed to canonicalize path {:?}", path))
    }

    fn walk_files(&self, root: &Path, pruned_dirs: &[String]) -> FileWalk<'_> {
        let pruned = pruned_dirs.to_vec();
        let walk_root = root.to_path_buf();

        // Hidden files and ignore files carry no meaning here: `.keep` is hidden,
        // and generated sources are often git-ignored.
        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && entry
                        .file_name()
                        .to_str()
                        .map_or(false, |name| pruned.iter().any(|p| p == name)))
            })
            .build();

        Box::new(walk.filter_map(move |result| match result {
            Ok(entry) => entry
                .file_type()
                .filter(|t| t.is_file())
                .map(|_| Ok(entry.into_path())),
            Err(err) => Some(
                Err::<PathBuf, _>(err)
                    .context(format!("Failed to walk directory {:?}", walk_root)),
            ),
        }))
    }
}

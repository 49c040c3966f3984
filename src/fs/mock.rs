use super::{FileSystem, FileWalk};
use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
enum MockEntry {
    File(String),
    Directory,
}

/// In-memory file tree rooted at `/mock` that records every write and delete
pub struct MockFileSystem {
    files: RwLock<BTreeMap<PathBuf, MockEntry>>,
    mutations: RwLock<Vec<PathBuf>>,
    unreadable: RwLock<BTreeSet<PathBuf>>,
    vanishing: RwLock<BTreeSet<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let mut files = BTreeMap::new();
        files.insert(root.clone(), MockEntry::Directory);
        Self {
            files: RwLock::new(files),
            mutations: RwLock::new(Vec::new()),
            unreadable: RwLock::new(BTreeSet::new()),
            vanishing: RwLock::new(BTreeSet::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }
        files.insert(path, MockEntry::File(content.to_string()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    /// Make reads of `path` fail while it still shows up in walks
    pub fn fail_reads(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.unreadable.write().unwrap().insert(path);
    }

    /// Let `path` be removed by someone else right before our own delete
    pub fn vanish_before_delete(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.vanishing.write().unwrap().insert(path);
    }

    /// Current content of a file, `None` if absent
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        match self.files.read().unwrap().get(&path) {
            Some(MockEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Paths written or deleted so far, in order
    pub fn mutations(&self) -> Vec<PathBuf> {
        self.mutations.read().unwrap().clone()
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut BTreeMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files
                .entry(current.clone())
                .or_insert(MockEntry::Directory);
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        matches!(
            self.files.read().unwrap().get(&path),
            Some(MockEntry::Directory)
        )
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        if self.unreadable.read().unwrap().contains(&path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }
        match self.files.read().unwrap().get(&path) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(MockEntry::Directory) => Err(anyhow!("Not a file: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();
        if matches!(files.get(&path), Some(MockEntry::Directory)) {
            return Err(anyhow!("Not a file: {:?}", path));
        }
        files.insert(path.clone(), MockEntry::File(contents.to_string()));
        self.mutations.write().unwrap().push(path);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<bool> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();
        if self.vanishing.write().unwrap().remove(&path) {
            files.remove(&path);
            return Ok(false);
        }
        match files.remove(&path) {
            Some(MockEntry::File(_)) => {
                self.mutations.write().unwrap().push(path);
                Ok(true)
            }
            Some(dir @ MockEntry::Directory) => {
                files.insert(path.clone(), dir);
                Err(anyhow!("Not a file: {:?}", path))
            }
            None => Ok(false),
        }
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let normalized = self.normalize_path(path);
        if self.files.read().unwrap().contains_key(&normalized) {
            Ok(normalized)
        } else {
            Err(anyhow!("Path not found: {:?}", path))
        }
    }

    fn walk_files(&self, root: &Path, pruned_dirs: &[String]) -> FileWalk<'_> {
        let root = self.normalize_path(root);
        let files: Vec<PathBuf> = self
            .files
            .read()
            .unwrap()
            .iter()
            .filter(|(_, entry)| matches!(entry, MockEntry::File(_)))
            .filter_map(|(path, _)| {
                let relative = path.strip_prefix(&root).ok()?;
                let parent = relative.parent().unwrap_or(Path::new(""));
                let pruned = parent.components().any(|c| match c {
                    Component::Normal(name) => pruned_dirs.iter().any(|p| name == p.as_str()),
                    _ => false,
                });
                (!pruned).then(|| path.clone())
            })
            .collect();

        Box::new(files.into_iter().map(Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_creates_parents() {
        let fs = MockFileSystem::new();
        fs.add_file("a/b/c/file.ts", "content");

        assert!(fs.is_dir(Path::new("/mock/a")));
        assert!(fs.is_dir(Path::new("/mock/a/b/c")));
        assert!(fs.exists(Path::new("/mock/a/b/c/file.ts")));
        assert!(!fs.is_dir(Path::new("/mock/a/b/c/file.ts")));
    }

    #[test]
    fn test_write_and_remove_are_recorded() {
        let fs = MockFileSystem::new();
        fs.add_file("x.ts", "old");

        fs.write(Path::new("x.ts"), "new").unwrap();
        assert_eq!(fs.content("x.ts").as_deref(), Some("new"));

        assert!(fs.remove_file(Path::new("x.ts")).unwrap());
        assert!(!fs.remove_file(Path::new("x.ts")).unwrap());
        assert_eq!(
            fs.mutations(),
            vec![PathBuf::from("/mock/x.ts"), PathBuf::from("/mock/x.ts")]
        );
    }

    #[test]
    fn test_injected_faults() {
        let fs = MockFileSystem::new();
        fs.add_file("locked.ts", "secret");
        fs.add_file("gone/.keep", "");
        fs.fail_reads("locked.ts");
        fs.vanish_before_delete("gone/.keep");

        assert!(fs.exists(Path::new("locked.ts")));
        assert!(fs.read_to_string(Path::new("locked.ts")).is_err());

        assert!(!fs.remove_file(Path::new("gone/.keep")).unwrap());
        assert!(!fs.exists(Path::new("gone/.keep")));
        assert!(fs.mutations().is_empty());
    }

    #[test]
    fn test_walk_order_and_pruning() {
        let fs = MockFileSystem::new();
        fs.add_file("src/page.tsx", "");
        fs.add_file("src/components/.keep", "");
        fs.add_file("src/node_modules/lib/index.js", "");
        fs.add_dir("src/empty");

        let files: Vec<PathBuf> = fs
            .walk_files(Path::new("src"), &["node_modules".to_string()])
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("/mock/src/components/.keep"),
                PathBuf::from("/mock/src/page.tsx"),
            ]
        );
    }

    #[test]
    fn test_with_root() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("frontend/src/app/page.tsx", "export {}");

        let content = fs
            .read_to_string(Path::new("/repo/frontend/src/app/page.tsx"))
            .unwrap();
        assert_eq!(content, "export {}");
        assert!(fs.canonicalize(Path::new("frontend")).is_ok());
        assert!(fs.canonicalize(Path::new("backend")).is_err());
    }
}

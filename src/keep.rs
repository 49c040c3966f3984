//! Keep-file remover: finds `.keep` placeholder files and deletes them

use crate::config::KeepConfig;
use crate::error::TidyError;
use crate::fs::FileSystem;
use crate::report::{KeepReport, RunMode};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct KeepRemover<F: FileSystem> {
    fs: F,
    config: KeepConfig,
}

impl<F: FileSystem> KeepRemover<F> {
    pub fn new(fs: F, config: KeepConfig) -> Result<Self, TidyError> {
        config.validate()?;
        Ok(Self { fs, config })
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Marker files below `root`, lazily
    pub fn markers<'a>(&'a self, root: &Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
        self.fs
            .walk_files(root, &[])
            .filter(move |entry| match entry {
                Ok(path) => self.config.matches(path),
                Err(_) => true,
            })
    }

    pub fn run(&self, root: &Path, mode: RunMode) -> Result<KeepReport, TidyError> {
        let mut report = KeepReport::new(root, mode, &self.config.file_name);
        self.run_into(root, &mut report)?;
        Ok(report)
    }

    /// Scan `root` in `report.mode`, recording each marker once it has been
    /// handled. On error, `report` still lists every marker already deleted.
    pub fn run_into(&self, root: &Path, report: &mut KeepReport) -> Result<(), TidyError> {
        let mode = report.mode;
        if !self.fs.exists(root) {
            return Err(TidyError::RootNotFound(root.to_path_buf()));
        }
        let root = self.fs.canonicalize(root)?;
        report.root = root.clone();

        if !self.fs.is_dir(&root) {
            warn!(root = %root.display(), "Root is not a directory, nothing to scan");
            return Ok(());
        }

        info!(
            root = %root.display(),
            file_name = %self.config.file_name,
            %mode,
            "Scanning for marker files"
        );

        for path in self.markers(&root) {
            let path = path?;
            let relative = relative_to(&path, &root);

            if mode.is_apply() {
                if self.fs.remove_file(&path)? {
                    report.deleted += 1;
                    debug!(file = %relative, "Deleted marker file");
                } else {
                    warn!(file = %relative, "Marker file disappeared before deletion");
                }
            } else {
                debug!(file = %relative, "Found marker file");
            }
            report.files.push(relative);
        }

        info!(
            found = report.found(),
            deleted = report.deleted,
            %mode,
            "Marker scan complete"
        );

        Ok(())
    }
}

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}

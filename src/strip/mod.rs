//! Font-style stripper: removes inline `fontFamily` declarations from script files

mod rewrite;

pub use rewrite::{FontFamilyRewriter, Rewrite};

use crate::config::StripConfig;
use crate::error::TidyError;
use crate::fs::FileSystem;
use crate::report::{RunMode, StripReport};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

pub struct FontStripper<F: FileSystem> {
    fs: F,
    config: StripConfig,
    rewriter: FontFamilyRewriter,
    display_base: Option<PathBuf>,
}

impl<F: FileSystem> FontStripper<F> {
    pub fn new(fs: F, config: StripConfig) -> Result<Self, TidyError> {
        config.validate()?;
        Ok(Self {
            fs,
            config,
            rewriter: FontFamilyRewriter::new(),
            display_base: None,
        })
    }

    /// Report file paths relative to `base` when they live below it
    pub fn with_display_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.display_base = Some(base.into());
        self
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Script files below `root`, lazily, skipping excluded directories
    pub fn candidates<'a>(&'a self, root: &Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
        self.fs
            .walk_files(root, &self.config.excluded_dirs)
            .filter(move |entry| match entry {
                Ok(path) => self.config.matches_extension(path),
                Err(_) => true,
            })
    }

    pub fn run(&self, root: &Path, mode: RunMode) -> Result<StripReport, TidyError> {
        let mut report = StripReport::new(root, mode);
        self.run_into(root, &mut report)?;
        Ok(report)
    }

    /// Scan `root` in `report.mode`, recording each file as soon as it has been
    /// handled. On error, `report` still lists every file already rewritten.
    pub fn run_into(&self, root: &Path, report: &mut StripReport) -> Result<(), TidyError> {
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

        info!(root = %root.display(), %mode, "Scanning for inline fontFamily styles");

        let mut scanned = 0usize;

        for path in self.candidates(&root) {
            let path = path?;
            scanned += 1;

            let original = self.fs.read_to_string(&path)?;
            let rewrite = self.rewriter.rewrite(&original);
            if !rewrite.is_changed() {
                trace!(file = %path.display(), "No fontFamily fragments");
                continue;
            }

            let shown = self.display_path(&path);
            debug!(
                file = %shown,
                replacements = rewrite.replacements,
                "Found fontFamily fragments"
            );

            if mode.is_apply() {
                self.fs.write(&path, &rewrite.content)?;
            }
            report.record(shown, rewrite.replacements);
        }

        info!(
            scanned,
            files_changed = report.files_changed,
            replacements = report.replacements,
            %mode,
            "Font strip complete"
        );

        Ok(())
    }

    fn display_path(&self, path: &Path) -> String {
        self.display_base
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

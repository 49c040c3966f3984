//! Run modes and the reports produced by each tidy operation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether an operation only reports or also mutates the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    DryRun,
    Apply,
}

impl RunMode {
    pub fn from_apply_flag(apply: bool) -> Self {
        if apply {
            RunMode::Apply
        } else {
            RunMode::DryRun
        }
    }

    pub fn is_apply(self) -> bool {
        self == RunMode::Apply
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::DryRun => write!(f, "dry-run"),
            RunMode::Apply => write!(f, "apply"),
        }
    }
}

/// One file that contained `fontFamily` fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub replacements: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripReport {
    pub root: PathBuf,
    pub mode: RunMode,
    pub files: Vec<FileChange>,
    pub files_changed: usize,
    pub replacements: usize,
}

impl StripReport {
    pub fn new(root: &Path, mode: RunMode) -> Self {
        Self {
            root: root.to_path_buf(),
            mode,
            files: Vec::new(),
            files_changed: 0,
            replacements: 0,
        }
    }

    pub fn record(&mut self, path: String, replacements: usize) {
        self.files_changed += 1;
        self.replacements += replacements;
        self.files.push(FileChange { path, replacements });
    }

    pub fn has_changes(&self) -> bool {
        self.files_changed > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepReport {
    pub root: PathBuf,
    pub mode: RunMode,
    pub file_name: String,
    /// Marker files found, relative to the root
    pub files: Vec<String>,
    /// Files actually removed by this run (apply mode only)
    pub deleted: usize,
}

impl KeepReport {
    pub fn new(root: &Path, mode: RunMode, file_name: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            mode,
            file_name: file_name.to_string(),
            files: Vec::new(),
            deleted: 0,
        }
    }

    pub fn found(&self) -> usize {
        self.files.len()
    }
}

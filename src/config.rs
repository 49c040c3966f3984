//! Configuration for the tidy operations
//!
//! Each operation has a small configuration struct whose `Default` carries the
//! conventions of a typical front-end tree:
//!
//! - `StripConfig`: scans `frontend/src` for `.tsx`, `.jsx`, `.ts` and `.js` files,
//!   never descending into `node_modules`
//! - `KeepConfig`: scans `.` for files named `.keep`
//!
//! Nothing is read from disk or from the environment; the CLI only overrides the
//! root directory.
//!
//! # Example
//!
//! ```
//! use frontend_tidy::config::StripConfig;
//!
//! let config = StripConfig::default().with_extensions(["vue"]);
//! assert!(config.matches_extension(std::path::Path::new("App.vue")));
//! config.validate().unwrap();
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_STRIP_ROOT: &str = "frontend/src";
pub const DEFAULT_KEEP_ROOT: &str = ".";
pub const DEFAULT_SCRIPT_EXTENSIONS: &[&str] = &["tsx", "jsx", "ts", "js"];
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules"];
pub const DEFAULT_KEEP_FILE_NAME: &str = ".keep";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No file extension would ever match
    #[error("At least one script extension is required")]
    NoExtensions,

    /// An extension was given with a leading dot or was blank
    #[error("Invalid extension '{0}': use the bare extension, e.g. 'tsx'")]
    InvalidExtension(String),

    /// Marker file name is blank or contains a path separator
    #[error("Invalid marker file name '{0}'")]
    InvalidMarkerName(String),
}

/// Settings for the font-style stripper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    /// Root scanned when none is given on the command line
    pub default_root: PathBuf,

    /// File extensions (without the dot) that are rewritten
    pub extensions: Vec<String>,

    /// Directory names whose subtrees are never scanned
    pub excluded_dirs: Vec<String>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            default_root: PathBuf::from(DEFAULT_STRIP_ROOT),
            extensions: DEFAULT_SCRIPT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StripConfig {
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `path` has one of the configured extensions (case-sensitive)
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e == ext))
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.trim().is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::InvalidExtension(bad.clone()));
        }
        Ok(())
    }
}

/// Settings for the keep-file remover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepConfig {
    pub default_root: PathBuf,

    /// Exact file name of the marker files to remove
    pub file_name: String,
}

impl Default for KeepConfig {
    fn default() -> Self {
        Self {
            default_root: PathBuf::from(DEFAULT_KEEP_ROOT),
            file_name: DEFAULT_KEEP_FILE_NAME.to_string(),
        }
    }
}

impl KeepConfig {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name == self.file_name)
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.file_name.as_str();
        if name.trim().is_empty() || name.contains('/') || name.contains('\\') {
            return Err(ConfigError::InvalidMarkerName(self.file_name.clone()));
        }
        Ok(())
    }
}

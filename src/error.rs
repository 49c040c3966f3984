use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a tidy run
#[derive(Debug, Error)]
pub enum TidyError {
    /// The directory to scan does not exist
    #[error("Root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Invalid tool configuration
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Any other I/O fault while walking, reading, writing or deleting
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl TidyError {
    pub fn is_root_not_found(&self) -> bool {
        matches!(self, TidyError::RootNotFound(_))
    }
}

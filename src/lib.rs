//! frontend-tidy - maintenance utilities for a web front-end tree
//!
//! Two independent, one-shot operations, each a dry run unless applied:
//!
//! - **Font-style stripping** ([`strip`]): removes inline `fontFamily: "..."`
//!   declarations from `.tsx`/`.jsx`/`.ts`/`.js` files with a regex rewrite,
//!   then tidies the punctuation left behind
//! - **Keep-file removal** ([`keep`]): deletes `.keep` placeholder files
//!
//! Both walk the tree lazily through the [`fs::FileSystem`] abstraction and
//! return a report that the [`cli::output`] module renders as text or JSON.
//!
//! # Example
//!
//! ```no_run
//! use frontend_tidy::{FontStripper, RealFileSystem, RunMode, StripConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), frontend_tidy::TidyError> {
//! let stripper = FontStripper::new(RealFileSystem::new(), StripConfig::default())?;
//! let report = stripper.run(Path::new("frontend/src"), RunMode::DryRun)?;
//! println!("{} replacements in {} files", report.replacements, report.files_changed);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod keep;
pub mod report;
pub mod strip;
pub mod util;

pub use config::{ConfigError, KeepConfig, StripConfig};
pub use error::TidyError;
pub use fs::{FileSystem, RealFileSystem};
pub use keep::KeepRemover;
pub use report::{FileChange, KeepReport, RunMode, StripReport};
pub use strip::{FontFamilyRewriter, FontStripper, Rewrite};
pub use util::{config_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

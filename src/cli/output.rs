//! Output formatting for tidy reports
//!
//! `Human` reproduces the plain console report; `Json` serializes the report
//! for scripts.
//!
//! # Example
//!
//! ```
//! use frontend_tidy::cli::output::{OutputFormat, OutputFormatter};
//! use frontend_tidy::report::{RunMode, StripReport};
//! use std::path::Path;
//!
//! let mut report = StripReport::new(Path::new("frontend/src"), RunMode::DryRun);
//! report.record("frontend/src/app/page.tsx".to_string(), 2);
//!
//! let text = OutputFormatter::new(OutputFormat::Human).format_strip(&report).unwrap();
//! assert!(text.starts_with("frontend/src/app/page.tsx: remove 2 fontFamily"));
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::report::{KeepReport, StripReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON format (machine-readable)
    Json,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_strip(&self, report: &StripReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Human => Ok(self.strip_human(report)),
        }
    }

    pub fn format_keep(&self, report: &KeepReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Human => Ok(self.keep_human(report)),
        }
    }

    fn format_json<T: Serialize>(&self, report: &T) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
    }

    fn strip_human(&self, report: &StripReport) -> String {
        let mut output = String::new();
        let suffix = if report.mode.is_apply() { " (apply)" } else { "" };

        for change in &report.files {
            let _ = writeln!(
                output,
                "{}: remove {} fontFamily{}",
                change.path, change.replacements, suffix
            );
        }

        let _ = writeln!(
            output,
            "\nFiles changed: {}, replacements: {}",
            report.files_changed, report.replacements
        );
        if !report.mode.is_apply() && report.has_changes() {
            output.push_str("Run with --apply to write changes.\n");
        }

        output
    }

    fn keep_human(&self, report: &KeepReport) -> String {
        if report.files.is_empty() {
            return format!("No {} files found.\n", report.file_name);
        }

        let mut output = String::new();
        let verb = if report.mode.is_apply() {
            "Deleted"
        } else {
            "Found"
        };

        for path in &report.files {
            let _ = writeln!(output, "{}: {}", verb, path);
        }

        let _ = writeln!(
            output,
            "\nTotal {} files: {}",
            report.file_name,
            report.found()
        );
        if !report.mode.is_apply() {
            output.push_str("Run with --apply to delete files.\n");
        }

        output
    }
}

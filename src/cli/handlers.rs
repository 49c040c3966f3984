//! Subcommand handlers. Each returns the process exit code.

use super::commands::{RemoveKeepArgs, StripFontsArgs};
use super::output::OutputFormatter;
use crate::config::{KeepConfig, StripConfig};
use crate::error::TidyError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::keep::KeepRemover;
use crate::report::{KeepReport, RunMode, StripReport};
use crate::strip::FontStripper;
use std::env;
use tracing::debug;

pub fn handle_strip_fonts(args: &StripFontsArgs) -> i32 {
    let mode = RunMode::from_apply_flag(args.apply);
    let fs = RealFileSystem::new();
    let config = StripConfig::default();
    let root = args.root.clone().unwrap_or_else(|| config.default_root.clone());

    // Report paths relative to where the tool was launched from.
    let display_base = env::current_dir()
        .ok()
        .and_then(|cwd| fs.canonicalize(&cwd).ok());

    let stripper = match FontStripper::new(fs, config) {
        Ok(stripper) => stripper,
        Err(e) => return report_failure(e),
    };
    let stripper = match display_base {
        Some(base) => stripper.with_display_base(base),
        None => stripper,
    };

    debug!(root = %root.display(), %mode, "Running strip-fonts");

    let formatter = OutputFormatter::new(args.format.into());
    let mut report = StripReport::new(&root, mode);
    match stripper.run_into(&root, &mut report) {
        Ok(()) => emit(formatter.format_strip(&report)),
        Err(e) if e.is_root_not_found() => report_failure(e),
        Err(e) => {
            // Files already rewritten are listed before the failure.
            emit(formatter.format_strip(&report));
            report_failure(e)
        }
    }
}

pub fn handle_remove_keep(args: &RemoveKeepArgs) -> i32 {
    let mode = RunMode::from_apply_flag(args.apply);
    let config = KeepConfig::default();
    let root = args.root.clone().unwrap_or_else(|| config.default_root.clone());
    let file_name = config.file_name.clone();

    let remover = match KeepRemover::new(RealFileSystem::new(), config) {
        Ok(remover) => remover,
        Err(e) => return report_failure(e),
    };

    debug!(root = %root.display(), %mode, "Running remove-keep");

    let formatter = OutputFormatter::new(args.format.into());
    let mut report = KeepReport::new(&root, mode, &file_name);
    match remover.run_into(&root, &mut report) {
        Ok(()) => emit(formatter.format_keep(&report)),
        Err(e) if e.is_root_not_found() => report_failure(e),
        Err(e) => {
            emit(formatter.format_keep(&report));
            report_failure(e)
        }
    }
}

fn emit(rendered: anyhow::Result<String>) -> i32 {
    match rendered {
        Ok(text) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn report_failure(err: TidyError) -> i32 {
    if err.is_root_not_found() {
        println!("{}", err);
    } else {
        eprintln!("Error: {:#}", err);
    }
    1
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Maintenance utilities for a web front-end tree
#[derive(Parser, Debug)]
#[command(
    name = "frontend-tidy",
    about = "Maintenance utilities for a web front-end tree",
    version,
    author,
    long_about = "frontend-tidy strips inline fontFamily style declarations from script files \
                  and removes .keep placeholder files. Every command is a dry run unless \
                  --apply is given."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Log debug details to stderr")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Remove inline fontFamily styles from .tsx/.jsx/.ts/.js files",
        long_about = "Scans the root recursively (skipping node_modules) and removes \
                      `fontFamily: \"...\"` fragments from object literals and style props. \
                      This is a textual rewrite, not a syntax-aware one.\n\n\
                      Examples:\n  \
                      frontend-tidy strip-fonts\n  \
                      frontend-tidy strip-fonts --apply\n  \
                      frontend-tidy strip-fonts --root web/src --format json"
    )]
    StripFonts(StripFontsArgs),

    #[command(
        about = "Delete .keep placeholder files",
        long_about = "Finds every file named exactly .keep below the root and deletes it \
                      when --apply is given.\n\n\
                      Examples:\n  \
                      frontend-tidy remove-keep\n  \
                      frontend-tidy remove-keep --apply --root frontend"
    )]
    RemoveKeep(RemoveKeepArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct StripFontsArgs {
    #[arg(long, help = "Write changes to files")]
    pub apply: bool,

    #[arg(
        long,
        value_name = "DIR",
        help = "Root directory to scan [default: frontend/src]"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveKeepArgs {
    #[arg(long, help = "Delete .keep files")]
    pub apply: bool,

    #[arg(
        long,
        value_name = "DIR",
        help = "Root directory to scan [default: .]"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
        }
    }
}

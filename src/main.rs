use frontend_tidy::cli::commands::{CliArgs, Commands};
use frontend_tidy::cli::handlers::{handle_remove_keep, handle_strip_fonts};
use frontend_tidy::util::logging::{config_from_env, init_logging, parse_level};
use frontend_tidy::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::StripFonts(strip_args) => handle_strip_fonts(strip_args),
        Commands::RemoveKeep(keep_args) => handle_remove_keep(keep_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        Some(parse_level(level_str))
    } else if args.verbose {
        Some(Level::DEBUG)
    } else if args.quiet {
        Some(Level::ERROR)
    } else {
        None
    };

    init_logging(config_from_env(level));
}

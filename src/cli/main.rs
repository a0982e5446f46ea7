//! Command-line interface entry point for `quranrange`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use quran_range::config::Config;
use quran_range::core::SurahCatalog;
use quran_range::info;
use quran_range::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let catalog = SurahCatalog::standard();
    let language = config.language();

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Surahs { names_only } => {
            commands::surahs::run(catalog, names_only);
        }
        Command::Range {
            range,
            summary,
            done,
        } => {
            if let Err(e) = commands::range::run(catalog, &range, language, summary, done) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Command::Planner {
            input_files,
            output,
        } => {
            if !commands::planner::run(catalog, &input_files, &output, &config, verbose) {
                std::process::exit(1);
            }
        }
    }
}

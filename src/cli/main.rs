//! Command-line interface entry point for `ElJunior`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use eljunior::config::Config;
use eljunior::info;
use eljunior::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
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

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Home { search, output } => {
            commands::screens::run_home(search.as_deref(), &output, &config);
        }
        Command::Catalog {
            category,
            search,
            output,
        } => {
            commands::screens::run_catalog(category, search.as_deref(), &output, &config);
        }
        Command::Browse { category } => commands::browse::run(category, &config),
        Command::Profile { output } => commands::screens::run_profile(&output, &config),
        Command::Logout { yes } => commands::logout::run(yes, &config),
        Command::Progress { output } => commands::screens::run_progress(&output, &config),
        Command::CatalogExport { path } => commands::screens::run_export(&path, &config),
    }
}

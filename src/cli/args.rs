//! CLI argument definitions for `ElJunior`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use eljunior::config::ConfigOverrides;
use eljunior::core::models::CategorySelector;
use eljunior::core::render::ScreenFormat;
use eljunior::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self).as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `email`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Where and how a screen is rendered
#[derive(Debug, Clone, Args)]
pub struct ScreenOutput {
    /// Output format: text or html
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    pub format: ScreenFormat,

    /// Write to a file instead of stdout; relative paths land in the config `out_dir`
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show the home dashboard.
    Home {
        /// Search text applied to the featured courses
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        #[command(flatten)]
        output: ScreenOutput,
    },
    /// Show the course catalog, filtered by category and search text.
    Catalog {
        /// Category key (`programming`, `design`, ...) or `all`
        #[arg(short, long, value_name = "KEY", default_value = "all")]
        category: CategorySelector,

        /// Search text matched against title and instructor
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        #[command(flatten)]
        output: ScreenOutput,
    },
    /// Browse the catalog interactively, re-filtering on every input line.
    ///
    /// A plain line replaces the search text. Commands: `:category KEY|all`,
    /// `:clear`, `:reset`, `:quit`.
    Browse {
        /// Initially selected category
        #[arg(short, long, value_name = "KEY", default_value = "all")]
        category: CategorySelector,
    },
    /// Show the profile screen.
    Profile {
        #[command(flatten)]
        output: ScreenOutput,
    },
    /// End the current session (asks for confirmation).
    Logout {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show learning progress.
    Progress {
        #[command(flatten)]
        output: ScreenOutput,
    },
    /// Write the active catalog to a TOML file.
    ///
    /// Useful to seed `catalog.file` from the built-in sample data.
    CatalogExport {
        /// Destination file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "eljunior",
    about = "ElJunior learning app command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog file
    #[arg(long = "catalog-file", value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Override the signed-in account email
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` in the result means the flag was not given and the loaded
    /// config value stays.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            catalog_file: self.catalog_file.as_ref().map(path_string),
            email: self.email.clone(),
            out_dir: self.out_dir.as_ref().map(path_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eljunior::core::models::Category;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("eljunior").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = parse(&["config"]).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog_file.is_none());
        assert!(overrides.email.is_none());
        assert!(overrides.out_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = parse(&[
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--catalog-file",
            "/data/catalog.toml",
            "--email",
            "anna@eljunior.com",
            "--out-dir",
            "/output",
            "profile",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.catalog_file, Some("/data/catalog.toml".to_string()));
        assert_eq!(overrides.email, Some("anna@eljunior.com".to_string()));
        assert_eq!(overrides.out_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_catalog_command_parsing() {
        let cli = parse(&["catalog", "--category", "design", "-s", "мария", "-f", "html"]);
        match cli.command {
            Command::Catalog {
                category,
                search,
                output,
            } => {
                assert_eq!(category, CategorySelector::Only(Category::Design));
                assert_eq!(search.as_deref(), Some("мария"));
                assert_eq!(output.format, ScreenFormat::Html);
                assert!(output.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_catalog_defaults_to_all() {
        let cli = parse(&["catalog"]);
        assert!(matches!(
            cli.command,
            Command::Catalog {
                category: CategorySelector::All,
                search: None,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result =
            Cli::try_parse_from(["eljunior", "catalog", "--category", "cooking"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_logout_yes_flag() {
        assert!(matches!(parse(&["logout", "--yes"]).command, Command::Logout { yes: true }));
        assert!(matches!(parse(&["logout"]).command, Command::Logout { yes: false }));
    }
}

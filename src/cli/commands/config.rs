//! Config command handler

use crate::args::ConfigSubcommand;
use eljunior::config::Config;
use eljunior::{error, info};
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        // Print specific config value
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        }
    } else {
        // Print all config values
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    info!("Config key {key} updated");
    // `set` may normalize the value (e.g. log level casing)
    let stored = config.get(key).unwrap_or_else(|| value.to_string());
    println!("✓ Set {key} = {stored}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    println!("✓ Reset {key} to default");
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        error!("Failed to save config to {}: {e}", Config::get_config_file_path().display());
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if ask_yes_no("Are you sure you want to reset config to defaults?") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

/// Print `question` with a `(y/n)` suffix and read the answer from stdin
pub fn ask_yes_no(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    is_yes(&response)
}

/// `y`/`yes` (or `д`/`да`), ignoring case and surrounding whitespace
pub fn is_yes(response: &str) -> bool {
    matches!(
        response.trim().to_lowercase().as_str(),
        "y" | "yes" | "д" | "да"
    )
}

//! Screen command handlers
//!
//! Render the home, catalog, profile and progress screens to stdout or to a
//! file, and export the active catalog.

use crate::args::ScreenOutput;
use eljunior::config::Config;
use eljunior::core::catalog::{open_configured, source, CatalogSource, TomlCatalog};
use eljunior::core::identity::ConfiguredIdentity;
use eljunior::core::models::CategorySelector;
use eljunior::core::render::ScreenRenderer;
use eljunior::core::screens::{CatalogScreen, HomeScreen, ProfileScreen, ProgressScreen};
use eljunior::{error, info};
use std::path::{Path, PathBuf};

/// Run a handler and report its failure the way every screen command does
fn report(command: &str, result: Result<(), String>) {
    if let Err(err) = result {
        error!("{command} failed: {err}");
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}

/// Where a rendered screen goes: explicit absolute paths are kept, relative
/// ones are placed under the configured output directory
pub fn resolve_output(requested: &Path, config: &Config) -> PathBuf {
    if requested.is_absolute() || config.paths.out_dir.is_empty() {
        requested.to_path_buf()
    } else {
        Path::new(&config.paths.out_dir).join(requested)
    }
}

/// Print the rendered screen or write it to the requested file
fn emit(view: &dyn ScreenRenderer, output: &ScreenOutput, config: &Config) -> Result<(), String> {
    match &output.output {
        Some(requested) => {
            let path = resolve_output(requested, config);
            view.write_to(output.format, &path)
                .map_err(|e| e.to_string())?;
            info!("Screen written to {}", path.display());
            println!("✓ Screen written: {}", path.display());
        }
        None => {
            let rendered = view.render(output.format).map_err(|e| e.to_string())?;
            print!("{rendered}");
        }
    }
    Ok(())
}

/// Open the catalog source named in the config
pub fn open_source(config: &Config) -> Result<Box<dyn CatalogSource>, String> {
    let source = open_configured(&config.catalog.file).map_err(|e| e.to_string())?;
    info!("Using {}", source.describe());
    Ok(source)
}

/// Run the home command
pub fn run_home(search: Option<&str>, output: &ScreenOutput, config: &Config) {
    report("home", home(search, output, config));
}

fn home(search: Option<&str>, output: &ScreenOutput, config: &Config) -> Result<(), String> {
    let source = open_source(config)?;
    let identity = ConfiguredIdentity::new(config.clone());
    let mut screen = HomeScreen::load(source.as_ref(), &identity).map_err(|e| e.to_string())?;
    if let Some(query) = search {
        screen.set_query(query);
    }
    emit(&screen.view(), output, config)
}

/// Run the catalog command
pub fn run_catalog(
    category: CategorySelector,
    search: Option<&str>,
    output: &ScreenOutput,
    config: &Config,
) {
    report("catalog", catalog(category, search, output, config));
}

fn catalog(
    category: CategorySelector,
    search: Option<&str>,
    output: &ScreenOutput,
    config: &Config,
) -> Result<(), String> {
    let source = open_source(config)?;
    let mut screen = CatalogScreen::load(source.as_ref()).map_err(|e| e.to_string())?;
    screen.select_category(category);
    if let Some(query) = search {
        screen.set_query(query);
    }
    emit(&screen.view(), output, config)
}

/// Run the profile command
pub fn run_profile(output: &ScreenOutput, config: &Config) {
    let identity = ConfiguredIdentity::new(config.clone());
    let screen = ProfileScreen::load(&identity);
    report("profile", emit(&screen.view(), output, config));
}

/// Run the progress command
pub fn run_progress(output: &ScreenOutput, config: &Config) {
    let result = ProgressScreen::sample()
        .map_err(|e| e.to_string())
        .and_then(|screen| emit(&screen.view(), output, config));
    report("progress", result);
}

/// Run the catalog-export command
pub fn run_export(path: &Path, config: &Config) {
    report("catalog-export", export(path, config));
}

fn export(path: &Path, config: &Config) -> Result<(), String> {
    let source = open_source(config)?;
    let file = source::snapshot(source.as_ref()).map_err(|e| e.to_string())?;
    TomlCatalog::write(&file, path).map_err(|e| e.to_string())?;
    info!("Catalog exported to {}", path.display());
    println!(
        "✓ Exported {} courses and {} featured to {}",
        file.courses.len(),
        file.featured.len(),
        path.display()
    );
    Ok(())
}

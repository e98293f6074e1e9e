//! Core module: domain models, catalog, screens, and rendering

pub mod catalog;
pub mod config;
pub mod identity;
pub mod models;
pub mod navigation;
pub mod render;
pub mod screens;

/// Returns the current version of the `ElJunior` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! CLI command handlers for `ElJunior`.
//!
//! Each command is implemented in its own submodule.

pub mod browse;
pub mod config;
pub mod logout;
pub mod screens;

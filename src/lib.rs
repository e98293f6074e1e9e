//! `ElJunior` learning app core
//! Course catalog filtering, screen state, and text/HTML rendering shared by the CLI

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;

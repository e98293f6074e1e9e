//! Rendering layer
//!
//! Turns screen view models into text or HTML through askama templates in
//! `templates/`. Renderers receive finished views and cannot write back into
//! the screens.

pub mod views;

pub use views::{
    text_bar, AchievementView, BarView, CatalogView, ChipView, CourseCard, HomeView, MenuView,
    ProfileView, ProgressView, StatView,
};

use askama::Template;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenFormat {
    /// Plain text for the terminal
    #[default]
    Text,
    /// Self-contained HTML page
    Html,
}

impl ScreenFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
        }
    }
}

impl FromStr for ScreenFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown screen format: {s}")),
        }
    }
}

impl fmt::Display for ScreenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Rendering failures
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template evaluation failed
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
    /// Output file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Destination
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// A view that can be rendered in every [`ScreenFormat`]
pub trait ScreenRenderer {
    /// Render to a string
    ///
    /// # Errors
    /// Returns an error if template evaluation fails
    fn render(&self, format: ScreenFormat) -> Result<String, RenderError>;

    /// Render into a file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn write_to(&self, format: ScreenFormat, path: &Path) -> Result<(), RenderError> {
        let content = self.render(format)?;
        let io_err = |source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)
    }
}

macro_rules! screen_templates {
    ($view:ident, $text:ident => $text_path:tt, $html:ident => $html_path:tt) => {
        #[derive(Template)]
        #[template(path = $text_path)]
        struct $text<'a> {
            view: &'a $view,
        }

        #[derive(Template)]
        #[template(path = $html_path)]
        struct $html<'a> {
            view: &'a $view,
        }

        impl ScreenRenderer for $view {
            fn render(&self, format: ScreenFormat) -> Result<String, RenderError> {
                let rendered = match format {
                    ScreenFormat::Text => $text { view: self }.render()?,
                    ScreenFormat::Html => $html { view: self }.render()?,
                };
                Ok(rendered)
            }
        }
    };
}

screen_templates!(CatalogView, CatalogText => "catalog.txt", CatalogHtml => "catalog.html");
screen_templates!(HomeView, HomeText => "home.txt", HomeHtml => "home.html");
screen_templates!(ProfileView, ProfileText => "profile.txt", ProfileHtml => "profile.html");
screen_templates!(ProgressView, ProgressText => "progress.txt", ProgressHtml => "progress.html");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("TXT".parse(), Ok(ScreenFormat::Text));
        assert_eq!("htm".parse(), Ok(ScreenFormat::Html));
        assert!("pdf".parse::<ScreenFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ScreenFormat::Text.extension(), "txt");
        assert_eq!(ScreenFormat::Html.extension(), "html");
        assert_eq!(ScreenFormat::default().to_string(), "text");
    }
}

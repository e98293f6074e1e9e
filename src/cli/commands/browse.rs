//! Interactive catalog browsing
//!
//! Every input line updates the selection and the list is recomputed right
//! away, the terminal equivalent of filtering on each keystroke.

use eljunior::config::Config;
use eljunior::core::models::CategorySelector;
use eljunior::core::render::{ScreenFormat, ScreenRenderer};
use eljunior::core::screens::CatalogScreen;
use eljunior::{debug, error};
use std::io::{self, BufRead, Write};

use super::screens::open_source;

/// One line typed at the browse prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    /// Replace the search text
    Query(String),
    /// Select a category chip
    Category(CategorySelector),
    /// Empty the search text
    Clear,
    /// All categories, empty search
    Reset,
    /// Leave the browser
    Quit,
}

impl BrowseInput {
    /// Parse a prompt line. Lines starting with `:` are commands; anything
    /// else (including an empty line) is search text.
    ///
    /// # Errors
    /// Returns a message for unknown commands or category keys
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.trim_start().strip_prefix(':') else {
            return Ok(Self::Query(line.to_string()));
        };
        let (name, arg) = command
            .trim()
            .split_once(char::is_whitespace)
            .map_or((command.trim(), ""), |(name, arg)| (name, arg.trim()));
        match name {
            "q" | "quit" => Ok(Self::Quit),
            "clear" => Ok(Self::Clear),
            "reset" => Ok(Self::Reset),
            "c" | "category" if arg.is_empty() => {
                Err("usage: :category KEY|all".to_string())
            }
            "c" | "category" => arg
                .parse()
                .map(Self::Category)
                .map_err(|e| e.to_string()),
            other => Err(format!("unknown command ':{other}'")),
        }
    }

    /// Apply the input to the screen. Returns `false` when browsing should stop.
    pub fn apply(self, screen: &mut CatalogScreen) -> bool {
        match self {
            Self::Query(query) => screen.set_query(query),
            Self::Category(selector) => screen.select_category(selector),
            Self::Clear => screen.selection_mut().clear_query(),
            Self::Reset => screen.selection_mut().reset(),
            Self::Quit => return false,
        }
        true
    }
}

/// Run the browse command
pub fn run(category: CategorySelector, config: &Config) {
    if let Err(err) = browse(category, config) {
        error!("browse failed: {err}");
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}

fn browse(category: CategorySelector, config: &Config) -> Result<(), String> {
    let source = open_source(config)?;
    let mut screen = CatalogScreen::load(source.as_ref()).map_err(|e| e.to_string())?;
    screen.select_category(category);

    println!("Type to search, :category KEY|all, :clear, :reset, :quit");
    show(&screen)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("failed to read input: {e}"))?;
        match BrowseInput::parse(&line) {
            Ok(input) => {
                debug!("browse input {input:?}");
                if !input.apply(&mut screen) {
                    break;
                }
                show(&screen)?;
            }
            Err(message) => eprintln!("✗ {message}"),
        }
    }
    Ok(())
}

fn show(screen: &CatalogScreen) -> Result<(), String> {
    let rendered = screen
        .view()
        .render(ScreenFormat::Text)
        .map_err(|e| e.to_string())?;
    println!("{rendered}");
    print!("> ");
    io::stdout().flush().ok();
    Ok(())
}

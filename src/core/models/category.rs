//! Course categories, difficulty levels, and the catalog category selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error produced when a string names no known category or level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownKey {
    /// What was being parsed ("category", "level", ...)
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl UnknownKey {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Lowercase and drop separators so `Web-Development`, `web_development`
/// and `WebDevelopment` compare equal.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Subject area a course belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    /// General programming
    Programming,
    /// HTML, CSS, JavaScript and friends
    WebDevelopment,
    /// UI/UX and visual design
    Design,
    /// Mathematics
    Math,
    /// Foreign languages
    Languages,
    /// Business and marketing
    Business,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 6] = [
        Self::Programming,
        Self::WebDevelopment,
        Self::Design,
        Self::Math,
        Self::Languages,
        Self::Business,
    ];

    /// Categories that always get a catalog chip. Any other category gets
    /// one only while the catalog has a course in it.
    pub const CHIPS: [Self; 5] = [
        Self::Programming,
        Self::Design,
        Self::Math,
        Self::Languages,
        Self::Business,
    ];

    /// Stable key used in config files, catalog files and CLI arguments
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::WebDevelopment => "web-development",
            Self::Design => "design",
            Self::Math => "math",
            Self::Languages => "languages",
            Self::Business => "business",
        }
    }

    /// Label shown on the category chip
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Programming => "Программирование",
            Self::WebDevelopment => "Веб-разработка",
            Self::Design => "Дизайн",
            Self::Math => "Математика",
            Self::Languages => "Языки",
            Self::Business => "Бизнес",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownKey;

    /// Accepts the key, the English variant name, or the display label,
    /// ignoring case and `-`/`_`/space separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_key(c.key()) == wanted || normalize_key(c.label()) == wanted)
            .ok_or_else(|| UnknownKey::new("category", s))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.key()
    }
}

/// Course difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Level {
    /// No prior knowledge expected
    Beginner,
    /// Some experience expected
    Intermediate,
    /// Solid background expected
    Advanced,
}

impl Level {
    /// Stable key used in files and arguments
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Badge label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Начинающий",
            Self::Intermediate => "Средний",
            Self::Advanced => "Продвинутый",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Level {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(s);
        [Self::Beginner, Self::Intermediate, Self::Advanced]
            .into_iter()
            .find(|l| l.key() == wanted || normalize_key(l.label()) == wanted)
            .ok_or_else(|| UnknownKey::new("level", s))
    }
}

impl TryFrom<String> for Level {
    type Error = UnknownKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.key()
    }
}

/// Which categories the catalog shows.
///
/// `All` is a variant of its own rather than a reserved category name, so it
/// can never be confused with a real category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    /// No category restriction
    #[default]
    All,
    /// Only courses in exactly this category
    Only(Category),
}

impl CategorySelector {
    /// Whether a course in `category` passes the selector
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Chip label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Only(category) => category.label(),
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategorySelector {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "all" | "все" => Ok(Self::All),
            _ => s.parse().map(Self::Only),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_variants() {
        assert_eq!("programming".parse(), Ok(Category::Programming));
        assert_eq!("Design".parse(), Ok(Category::Design));
        assert_eq!("WebDevelopment".parse(), Ok(Category::WebDevelopment));
        assert_eq!("web_development".parse(), Ok(Category::WebDevelopment));
        assert_eq!("Математика".parse(), Ok(Category::Math));
        assert_eq!("языки".parse(), Ok(Category::Languages));
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "Cooking".parse::<Category>().unwrap_err();
        assert_eq!(err.kind, "category");
        assert_eq!(err.value, "Cooking");
    }

    #[test]
    fn test_category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse(), Ok(category));
        }
    }

    #[test]
    fn test_all_is_not_a_category() {
        assert!("all".parse::<Category>().is_err());
        assert!("Все".parse::<Category>().is_err());
        assert_eq!("ALL".parse(), Ok(CategorySelector::All));
        assert_eq!("Все".parse(), Ok(CategorySelector::All));
    }

    #[test]
    fn test_selector_matches() {
        for category in Category::ALL {
            assert!(CategorySelector::All.matches(category));
        }
        let design = CategorySelector::Only(Category::Design);
        assert!(design.matches(Category::Design));
        assert!(!design.matches(Category::Programming));
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(CategorySelector::All.to_string(), "all");
        assert_eq!(CategorySelector::from(Category::Math).to_string(), "math");
        assert_eq!(CategorySelector::All.label(), "Все");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("Beginner".parse(), Ok(Level::Beginner));
        assert_eq!("средний".parse(), Ok(Level::Intermediate));
        assert!("expert".parse::<Level>().is_err());
    }
}

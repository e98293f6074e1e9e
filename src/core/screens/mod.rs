//! Screen state and logic
//!
//! Each screen owns its state, takes its collaborators (catalog source,
//! identity provider, navigator) as arguments, and produces a view model for
//! [`crate::core::render`].

pub mod catalog;
pub mod home;
pub mod profile;
pub mod progress;

pub use catalog::{CatalogScreen, Chip};
pub use home::{ContinueLearning, HomeScreen};
pub use profile::{Confirm, LogoutOutcome, MenuItem, ProfileScreen};
pub use progress::ProgressScreen;

use crate::core::render::StatView;

/// Name shown when nobody is signed in
pub const GUEST_NAME: &str = "Студент";

/// Fixed label with a formatted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    /// Caption
    pub label: &'static str,
    /// Value as displayed
    pub value: String,
}

impl Stat {
    /// Create a counter
    #[must_use]
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl From<&Stat> for StatView {
    fn from(stat: &Stat) -> Self {
        Self::new(stat.label, stat.value.clone())
    }
}

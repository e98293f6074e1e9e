//! Selection state owned by a screen that shows the catalog

use super::{Catalog, CourseFilter};
use crate::core::models::{CategorySelector, Course};
use crate::debug;

/// The two cells the catalog filter reads: the active category chip and the
/// search box text. A fresh selection shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    category: CategorySelector,
    query: String,
}

impl Selection {
    /// Selection with the default values (all categories, empty query)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active category selector
    #[must_use]
    pub const fn category(&self) -> CategorySelector {
        self.category
    }

    /// Current search text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a category chip
    pub fn set_category(&mut self, category: CategorySelector) {
        self.category = category;
    }

    /// Replace the search text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Empty the search text, keeping the category
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Back to all categories and an empty query
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Filter for the current state
    #[must_use]
    pub fn filter(&self) -> CourseFilter {
        CourseFilter::new(self.category, self.query.clone())
    }

    /// Courses visible under the current state. Re-scans the whole catalog.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Course> {
        let visible = catalog.filter(&self.filter());
        debug!(
            "catalog filter category={} query={:?}: {} of {} courses",
            self.category,
            self.query,
            visible.len(),
            catalog.len()
        );
        visible
    }
}

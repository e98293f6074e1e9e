//! Category and text filter over a course list
//!
//! A course is kept when it passes both the category selector and the text
//! query. The query is matched as a case-folded substring of the title or the
//! instructor; an empty query matches everything. Output order always follows
//! the input order.

use crate::core::models::{CategorySelector, Course};

/// Normalize text for case-insensitive comparison.
///
/// Uses Unicode lowercasing, so Cyrillic and Latin fold the same way. No
/// transliteration or trimming is applied.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Inclusion test built from a category selector and a search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    selector: CategorySelector,
    query: String,
    folded_query: String,
}

impl CourseFilter {
    /// Create a filter. The query is folded once here rather than per course.
    #[must_use]
    pub fn new(selector: CategorySelector, query: impl Into<String>) -> Self {
        let query = query.into();
        let folded_query = fold_case(&query);
        Self {
            selector,
            query,
            folded_query,
        }
    }

    /// Filter that keeps every course
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Category part of the filter
    #[must_use]
    pub const fn selector(&self) -> CategorySelector {
        self.selector
    }

    /// Query exactly as entered
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the filter keeps every course of a list
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.selector == CategorySelector::All && self.folded_query.is_empty()
    }

    /// Whether `course` passes both the category and the text test
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        self.selector.matches(course.category) && self.matches_text(course)
    }

    fn matches_text(&self, course: &Course) -> bool {
        if self.folded_query.is_empty() {
            return true;
        }
        fold_case(&course.title).contains(&self.folded_query)
            || fold_case(&course.instructor).contains(&self.folded_query)
    }

    /// Courses that pass the filter, in input order
    #[must_use]
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|course| self.matches(course)).collect()
    }
}

/// One-shot form of [`CourseFilter::apply`]
#[must_use]
pub fn filter_courses<'a>(
    courses: &'a [Course],
    selector: CategorySelector,
    query: &str,
) -> Vec<&'a Course> {
    CourseFilter::new(selector, query).apply(courses)
}

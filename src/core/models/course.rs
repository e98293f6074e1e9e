//! Course model

use super::{Category, Level};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque course identifier, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Wrap a raw identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A course as listed in the catalog.
///
/// Only `title` and `instructor` are searched; the other fields are display
/// data. A record without a title or instructor deserializes with an empty
/// string in their place so the search stays total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog identifier
    pub id: CourseId,

    /// Display title (e.g., "Python для начинающих")
    #[serde(default)]
    pub title: String,

    /// Subject area
    pub category: Category,

    /// Instructor display name (e.g., "Иван Петров")
    #[serde(default)]
    pub instructor: String,

    /// Free-form duration (e.g., "8 недель")
    #[serde(default)]
    pub duration: String,

    /// Average rating, 0.0 to 5.0
    #[serde(default)]
    pub rating: f32,

    /// Number of enrolled students
    #[serde(default, alias = "enrolled")]
    pub students: u32,

    /// Difficulty badge, when the listing has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,

    /// Price badge (e.g., "Бесплатно", "₸15,000")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Course {
    /// Create a course with the searchable fields set and empty display data
    #[must_use]
    pub fn new(
        id: impl Into<CourseId>,
        title: impl Into<String>,
        category: Category,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            instructor: instructor.into(),
            duration: String::new(),
            rating: 0.0,
            students: 0,
            level: None,
            price: None,
            thumbnail: None,
        }
    }

    /// Set the duration text
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set the rating and student count
    #[must_use]
    pub const fn with_stats(mut self, rating: f32, students: u32) -> Self {
        self.rating = rating;
        self.students = students;
        self
    }

    /// Set the difficulty badge
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the price badge
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Set the cover image
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("7", "Rust с нуля", Category::Programming, "Ольга Орлова");

        assert_eq!(course.id.as_str(), "7");
        assert_eq!(course.title, "Rust с нуля");
        assert_eq!(course.category, Category::Programming);
        assert_eq!(course.instructor, "Ольга Орлова");
        assert!(course.duration.is_empty());
        assert!(course.level.is_none());
        assert!(course.price.is_none());
    }

    #[test]
    fn test_builder_fields() {
        let course = Course::new("2", "UI/UX Дизайн с нуля", Category::Design, "Мария Иванова")
            .with_duration("6 недель")
            .with_stats(4.9, 856)
            .with_level(Level::Beginner)
            .with_price("₸15,000");

        assert_eq!(course.duration, "6 недель");
        assert!((course.rating - 4.9).abs() < f32::EPSILON);
        assert_eq!(course.students, 856);
        assert_eq!(course.level, Some(Level::Beginner));
        assert_eq!(course.price.as_deref(), Some("₸15,000"));
    }

    #[test]
    fn test_missing_searchable_fields_default_to_empty() {
        let course: Course = toml::from_str(
            r#"
id = "9"
category = "math"
"#,
        )
        .unwrap();

        assert_eq!(course.title, "");
        assert_eq!(course.instructor, "");
        assert_eq!(course.category, Category::Math);
    }

    #[test]
    fn test_enrolled_alias() {
        let course: Course = toml::from_str(
            r#"
id = "1"
title = "Основы программирования на Python"
category = "Programming"
instructor = "Иван Петров"
enrolled = 1234
"#,
        )
        .unwrap();

        assert_eq!(course.students, 1234);
    }
}

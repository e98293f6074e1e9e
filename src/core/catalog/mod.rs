//! Course catalog: the immutable course list, its sources, and filtering
//!
//! A [`Catalog`] is built once from a [`CatalogSource`] and never changes
//! afterwards. Screens derive what they show through [`CourseFilter`], driven
//! by a [`Selection`].

pub mod filter;
pub mod selection;
pub mod source;

pub use filter::{filter_courses, fold_case, CourseFilter};
pub use selection::Selection;
pub use source::{open_configured, CatalogFile, CatalogSource, SampleCatalog, TomlCatalog};

use crate::core::models::{Category, Course, CourseId, UnknownKey};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id
    #[error("duplicate course id '{0}'")]
    DuplicateId(CourseId),
    /// Rating outside 0.0..=5.0
    #[error("course '{id}' has rating {rating}, expected 0.0 to 5.0")]
    InvalidRating {
        /// Offending course
        id: CourseId,
        /// Rejected rating
        rating: f32,
    },
    /// Catalog file could not be read or written
    #[error("failed to access catalog {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// Catalog file is not valid TOML or has invalid records
    #[error("failed to parse catalog {}: {source}", .path.display())]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
    /// Catalog could not be serialized
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Unknown category or level key
    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),
}

/// Ordered, read-only list of courses with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and ratings in range
    ///
    /// # Errors
    /// Returns `DuplicateId` or `InvalidRating` for the first bad record
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if !seen.insert(&course.id) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
            if !(0.0..=5.0).contains(&course.rating) {
                return Err(CatalogError::InvalidRating {
                    id: course.id.clone(),
                    rating: course.rating,
                });
            }
        }
        Ok(Self { courses })
    }

    /// Build the catalog from a source's course list
    ///
    /// # Errors
    /// Propagates source errors and validation errors from [`Catalog::new`]
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        Self::new(source.courses()?)
    }

    /// All courses, in source order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Give back the validated course list
    #[must_use]
    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id.as_str() == id)
    }

    /// Categories that have at least one course, in [`Category::ALL`] order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.courses.iter().any(|c| c.category == *category))
            .collect()
    }

    /// Courses passing `filter`, in source order
    #[must_use]
    pub fn filter(&self, filter: &CourseFilter) -> Vec<&Course> {
        filter.apply(&self.courses)
    }
}

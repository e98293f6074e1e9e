//! Data models for `ElJunior`

pub mod category;
pub mod course;
pub mod progress;

pub use category::{Category, CategorySelector, Level, UnknownKey};
pub use course::{Course, CourseId};
pub use progress::{
    Achievement, CourseProgress, DayActivity, LessonCount, ProgressError, ProgressOverview,
    WeeklyActivity,
};

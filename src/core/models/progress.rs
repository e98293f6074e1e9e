//! Learning progress records shown on the progress screen

use std::fmt;
use std::str::FromStr;

/// Errors raised while reading progress data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Lesson count is not of the form `completed/total`
    #[error("malformed lesson count '{0}', expected 'completed/total'")]
    MalformedLessons(String),
    /// More lessons completed than exist
    #[error("lesson count '{completed}/{total}' completes more lessons than the course has")]
    LessonsOverflow {
        /// Lessons completed
        completed: u32,
        /// Lessons in the course
        total: u32,
    },
    /// Percentage above 100
    #[error("progress of {0}% exceeds 100%")]
    PercentOutOfRange(u8),
}

/// Headline counters at the top of the progress screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOverview {
    /// Courses finished
    pub completed_courses: u32,
    /// Total learning time in hours
    pub learning_hours: u32,
    /// Consecutive days with activity
    pub streak_days: u32,
    /// Average score, percent
    pub average_score: u8,
}

/// Activity for one day of the week, as a share of the best day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayActivity {
    /// Short day name ("ПН")
    pub day: String,
    /// Relative activity, 0 to 100
    pub percent: u8,
}

/// Seven days of activity, Monday first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyActivity {
    days: Vec<DayActivity>,
}

impl WeeklyActivity {
    /// Short day names, Monday first
    pub const DAY_NAMES: [&'static str; 7] = ["ПН", "ВТ", "СР", "ЧТ", "ПТ", "СБ", "ВС"];

    /// Build a week from seven percentages, Monday first
    ///
    /// # Errors
    /// Returns `PercentOutOfRange` if any value exceeds 100
    pub fn from_percents(percents: [u8; 7]) -> Result<Self, ProgressError> {
        let days = Self::DAY_NAMES
            .iter()
            .zip(percents)
            .map(|(day, percent)| {
                if percent > 100 {
                    return Err(ProgressError::PercentOutOfRange(percent));
                }
                Ok(DayActivity {
                    day: (*day).to_string(),
                    percent,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { days })
    }

    /// Days, Monday first
    #[must_use]
    pub fn days(&self) -> &[DayActivity] {
        &self.days
    }

    /// Day with the highest activity; the earliest one wins a tie
    #[must_use]
    pub fn most_active_day(&self) -> Option<&DayActivity> {
        self.days
            .iter()
            .reduce(|best, day| if day.percent > best.percent { day } else { best })
    }
}

/// A badge the learner can earn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    /// Identifier
    pub id: String,
    /// Badge title ("Первый урок")
    pub title: String,
    /// Whether it has been earned
    pub unlocked: bool,
}

impl Achievement {
    /// Create an achievement
    #[must_use]
    pub fn new(id: &str, title: &str, unlocked: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unlocked,
        }
    }
}

/// Lessons completed out of the course total, written `13/20`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonCount {
    /// Lessons completed
    pub completed: u32,
    /// Lessons in the course
    pub total: u32,
}

impl LessonCount {
    /// Create a lesson count
    ///
    /// # Errors
    /// Returns `LessonsOverflow` when `completed > total`
    pub const fn new(completed: u32, total: u32) -> Result<Self, ProgressError> {
        if completed > total {
            return Err(ProgressError::LessonsOverflow { completed, total });
        }
        Ok(Self { completed, total })
    }
}

impl FromStr for LessonCount {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ProgressError::MalformedLessons(s.to_string());
        let (completed, total) = s.trim().split_once('/').ok_or_else(malformed)?;
        let completed = completed.trim().parse().map_err(|_| malformed())?;
        let total = total.trim().parse().map_err(|_| malformed())?;
        Self::new(completed, total)
    }
}

impl fmt::Display for LessonCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// A course the learner is part-way through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProgress {
    /// Identifier
    pub id: String,
    /// Course title
    pub title: String,
    /// Completion, 0 to 100
    pub percent: u8,
    /// Lessons done out of total
    pub lessons: LessonCount,
}

impl CourseProgress {
    /// Create a progress entry
    ///
    /// # Errors
    /// Returns an error if `percent` exceeds 100 or `lessons` is malformed
    pub fn new(id: &str, title: &str, percent: u8, lessons: &str) -> Result<Self, ProgressError> {
        if percent > 100 {
            return Err(ProgressError::PercentOutOfRange(percent));
        }
        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            percent,
            lessons: lessons.parse()?,
        })
    }
}

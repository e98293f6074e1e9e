//! Flat, display-ready view models handed to the templates
//!
//! Screens build these; templates only read them. Every number is already
//! formatted so the text and HTML templates show identical values.

use crate::core::models::Course;

/// Label/value counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatView {
    /// Caption
    pub label: String,
    /// Formatted value
    pub value: String,
}

impl StatView {
    /// Create a counter
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Course card in a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    /// Course id
    pub id: String,
    /// Title
    pub title: String,
    /// Category label
    pub category: String,
    /// Instructor name
    pub instructor: String,
    /// Rating, one decimal
    pub rating: String,
    /// Student count with thousands grouped
    pub students: String,
    /// Duration text
    pub duration: String,
    /// Level badge, empty when the course has none
    pub level: String,
    /// Price badge, empty when the course has none
    pub price: String,
}

impl From<&Course> for CourseCard {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title.clone(),
            category: course.category.label().to_string(),
            instructor: course.instructor.clone(),
            rating: format!("{:.1}", course.rating),
            students: group_thousands(course.students),
            duration: course.duration.clone(),
            level: course.level.map(|l| l.label().to_string()).unwrap_or_default(),
            price: course.price.clone().unwrap_or_default(),
        }
    }
}

/// Category chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    /// Chip text
    pub label: String,
    /// Key accepted by the CLI (`all`, `design`, ...)
    pub key: String,
    /// Whether this chip is selected
    pub active: bool,
}

/// Catalog screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    /// Screen heading
    pub heading: String,
    /// Search box text
    pub query: String,
    /// Category chips, "all" first
    pub chips: Vec<ChipView>,
    /// Visible courses
    pub cards: Vec<CourseCard>,
    /// Courses in the catalog before filtering
    pub total: usize,
}

/// Home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    /// Name in the greeting
    pub user_name: String,
    /// Search box text
    pub query: String,
    /// Platform counters
    pub stats: Vec<StatView>,
    /// Featured courses passing the search
    pub featured: Vec<CourseCard>,
    /// Continue-learning course title
    pub continue_title: String,
    /// Continue-learning completion
    pub continue_percent: u8,
    /// Continue-learning text bar
    pub continue_bar: String,
}

/// Profile menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// Entry title
    pub title: String,
    /// Entry subtitle
    pub subtitle: String,
}

/// Profile screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Display name
    pub name: String,
    /// Email line
    pub email: String,
    /// Personal counters
    pub stats: Vec<StatView>,
    /// Menu entries
    pub menu: Vec<MenuView>,
    /// Version line
    pub app_info: String,
}

/// One bar of a chart or progress list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarView {
    /// Row label
    pub label: String,
    /// Fill, 0 to 100
    pub percent: u8,
    /// Text rendering of the fill
    pub bar: String,
    /// Extra text after the bar (lesson count, ...)
    pub note: String,
}

/// Achievement badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementView {
    /// Badge title
    pub title: String,
    /// Whether it is earned
    pub unlocked: bool,
}

/// Progress screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    /// Headline counters
    pub stats: Vec<StatView>,
    /// Weekly activity, Monday first
    pub week: Vec<BarView>,
    /// Most active day label
    pub best_day: String,
    /// Badges
    pub achievements: Vec<AchievementView>,
    /// Earned badges count
    pub unlocked: usize,
    /// Courses in progress
    pub courses: Vec<BarView>,
    /// Mean completion across courses in progress
    pub average_progress: u8,
}

/// Width of text progress bars, in cells
pub const BAR_WIDTH: usize = 10;

/// Text bar for `percent`, rounded to the nearest cell
#[must_use]
pub fn text_bar(percent: u8) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// `1234567` -> `"1 234 567"`
#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

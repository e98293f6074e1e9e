//! Progress screen

use super::Stat;
use crate::core::models::{
    Achievement, CourseProgress, DayActivity, ProgressError, ProgressOverview, WeeklyActivity,
};
use crate::core::render::{text_bar, AchievementView, BarView, ProgressView, StatView};

/// Learning statistics for the signed-in learner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressScreen {
    overview: ProgressOverview,
    week: WeeklyActivity,
    achievements: Vec<Achievement>,
    courses: Vec<CourseProgress>,
}

impl ProgressScreen {
    /// Screen over explicit records
    #[must_use]
    pub const fn new(
        overview: ProgressOverview,
        week: WeeklyActivity,
        achievements: Vec<Achievement>,
        courses: Vec<CourseProgress>,
    ) -> Self {
        Self {
            overview,
            week,
            achievements,
            courses,
        }
    }

    /// Demo records
    ///
    /// # Errors
    /// Returns an error if a built-in record is inconsistent
    pub fn sample() -> Result<Self, ProgressError> {
        let overview = ProgressOverview {
            completed_courses: 12,
            learning_hours: 48,
            streak_days: 7,
            average_score: 85,
        };
        let week = WeeklyActivity::from_percents([60, 80, 40, 90, 70, 100, 85])?;
        let achievements = vec![
            Achievement::new("1", "Первый урок", true),
            Achievement::new("2", "Неделя подряд", true),
            Achievement::new("3", "10 курсов", false),
            Achievement::new("4", "Отличник", false),
        ];
        let courses = vec![
            CourseProgress::new("1", "Python для начинающих", 65, "13/20")?,
            CourseProgress::new("2", "React Native разработка", 45, "9/20")?,
            CourseProgress::new("3", "UI/UX Дизайн", 80, "16/20")?,
        ];
        Ok(Self::new(overview, week, achievements, courses))
    }

    /// Headline counters
    #[must_use]
    pub const fn overview(&self) -> &ProgressOverview {
        &self.overview
    }

    /// Weekly activity
    #[must_use]
    pub const fn week(&self) -> &WeeklyActivity {
        &self.week
    }

    /// All badges
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Courses in progress
    #[must_use]
    pub fn courses(&self) -> &[CourseProgress] {
        &self.courses
    }

    /// Earned badges
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Badges still to earn
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.achievements.len() - self.unlocked_count()
    }

    /// Day with the most activity
    #[must_use]
    pub fn most_active_day(&self) -> Option<&DayActivity> {
        self.week.most_active_day()
    }

    /// Integer mean completion of the courses in progress, 0 when there are none
    #[must_use]
    pub fn average_progress(&self) -> u8 {
        if self.courses.is_empty() {
            return 0;
        }
        let sum: usize = self.courses.iter().map(|c| usize::from(c.percent)).sum();
        // Mean of values <= 100 stays <= 100
        u8::try_from(sum / self.courses.len()).unwrap_or(100)
    }

    fn stats(&self) -> [Stat; 4] {
        let o = &self.overview;
        [
            Stat::new("Завершено курсов", o.completed_courses.to_string()),
            Stat::new("Времени обучения", format!("{}ч", o.learning_hours)),
            Stat::new("Дней подряд", o.streak_days.to_string()),
            Stat::new("Средний балл", format!("{}%", o.average_score)),
        ]
    }

    /// Display model for the renderer
    #[must_use]
    pub fn view(&self) -> ProgressView {
        ProgressView {
            stats: self.stats().iter().map(StatView::from).collect(),
            week: self
                .week
                .days()
                .iter()
                .map(|day| BarView {
                    label: day.day.clone(),
                    percent: day.percent,
                    bar: text_bar(day.percent),
                    note: String::new(),
                })
                .collect(),
            best_day: self
                .most_active_day()
                .map(|day| day.day.clone())
                .unwrap_or_default(),
            achievements: self
                .achievements
                .iter()
                .map(|a| AchievementView {
                    title: a.title.clone(),
                    unlocked: a.unlocked,
                })
                .collect(),
            unlocked: self.unlocked_count(),
            courses: self
                .courses
                .iter()
                .map(|course| BarView {
                    label: course.title.clone(),
                    percent: course.percent,
                    bar: text_bar(course.percent),
                    note: course.lessons.to_string(),
                })
                .collect(),
            average_progress: self.average_progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts() {
        let screen = ProgressScreen::sample().unwrap();
        assert_eq!(screen.unlocked_count(), 2);
        assert_eq!(screen.locked_count(), 2);
        assert_eq!(screen.average_progress(), 63);
        assert_eq!(screen.most_active_day().unwrap().day, "СБ");
    }

    #[test]
    fn test_empty_courses_average() {
        let screen = ProgressScreen::new(
            ProgressOverview {
                completed_courses: 0,
                learning_hours: 0,
                streak_days: 0,
                average_score: 0,
            },
            WeeklyActivity::default(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(screen.average_progress(), 0);
        assert_eq!(screen.locked_count(), 0);
        assert!(screen.most_active_day().is_none());
        assert_eq!(screen.view().best_day, "");
    }

    #[test]
    fn test_view() {
        let view = ProgressScreen::sample().unwrap().view();
        assert_eq!(view.stats[1].value, "48ч");
        assert_eq!(view.stats[3].value, "85%");
        assert_eq!(view.week.len(), 7);
        assert_eq!(view.courses[0].note, "13/20");
        assert_eq!(view.best_day, "СБ");
    }
}

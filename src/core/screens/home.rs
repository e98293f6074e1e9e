//! Home dashboard screen

use super::{Stat, GUEST_NAME};
use crate::core::catalog::{filter_courses, Catalog, CatalogError, CatalogSource};
use crate::core::identity::{AuthState, IdentityProvider};
use crate::core::models::{CategorySelector, Course};
use crate::core::navigation::{Navigator, Route};
use crate::core::render::{text_bar, CourseCard, HomeView, StatView};

/// The course the learner last worked on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueLearning {
    /// Course title
    pub title: String,
    /// Completion, 0 to 100
    pub percent: u8,
}

/// Home dashboard: greeting, platform counters, featured courses, and the
/// continue-learning card
#[derive(Debug, Clone)]
pub struct HomeScreen {
    auth: AuthState,
    featured: Vec<Course>,
    query: String,
}

impl HomeScreen {
    /// Open the screen for `auth` with the source's featured courses
    ///
    /// # Errors
    /// Returns an error if the source cannot produce its featured list, or
    /// the list has a duplicate id or an out-of-range rating
    pub fn load(
        source: &dyn CatalogSource,
        identity: &dyn IdentityProvider,
    ) -> Result<Self, CatalogError> {
        let featured = Catalog::new(source.featured()?)?.into_courses();
        Ok(Self::new(AuthState::resolve(identity), featured))
    }

    /// Screen over explicit data
    #[must_use]
    pub const fn new(auth: AuthState, featured: Vec<Course>) -> Self {
        Self {
            auth,
            featured,
            query: String::new(),
        }
    }

    /// Who is signed in
    #[must_use]
    pub const fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Name shown under the greeting: the account email, or a generic name
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.auth
            .identity()
            .map_or(GUEST_NAME, |identity| identity.email.as_str())
    }

    /// Search box text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Type into the search box
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Featured courses passing the search box
    #[must_use]
    pub fn visible_featured(&self) -> Vec<&Course> {
        filter_courses(&self.featured, CategorySelector::All, &self.query)
    }

    /// Tap a featured course: opens the catalog tab. Returns `false` for an
    /// unknown id.
    pub fn open_course(&self, id: &str, navigator: &mut dyn Navigator) -> bool {
        let known = self.featured.iter().any(|course| course.id.as_str() == id);
        if known {
            navigator.navigate(Route::Courses);
        }
        known
    }

    /// Platform-wide counters
    #[must_use]
    pub fn platform_stats() -> [Stat; 3] {
        [
            Stat::new("Курсов", "150+"),
            Stat::new("Часов контента", "500+"),
            Stat::new("Студентов", "10k+"),
        ]
    }

    /// Continue-learning card
    #[must_use]
    pub fn continue_learning() -> ContinueLearning {
        ContinueLearning {
            title: "React Native для начинающих".to_string(),
            percent: 65,
        }
    }

    /// Display model for the renderer
    #[must_use]
    pub fn view(&self) -> HomeView {
        let resume = Self::continue_learning();
        HomeView {
            user_name: self.greeting_name().to_string(),
            query: self.query.clone(),
            stats: Self::platform_stats().iter().map(StatView::from).collect(),
            featured: self
                .visible_featured()
                .into_iter()
                .map(CourseCard::from)
                .collect(),
            continue_bar: text_bar(resume.percent),
            continue_title: resume.title,
            continue_percent: resume.percent,
        }
    }
}

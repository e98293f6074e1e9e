//! Navigation boundary: screens ask to move to a route and never wait for it

use std::fmt;

/// Screens the client can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Home dashboard tab
    Home,
    /// Course catalog tab
    Courses,
    /// Profile tab
    Profile,
    /// Progress tab
    Progress,
    /// Sign-in screen
    Login,
}

impl Route {
    /// Router path
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/(tabs)",
            Self::Courses => "/(tabs)/courses",
            Self::Profile => "/(tabs)/profile",
            Self::Progress => "/(tabs)/progress",
            Self::Login => "/(auth)/login",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Fire-and-forget navigation
pub trait Navigator {
    /// Move to `route`
    fn navigate(&mut self, route: Route);
}

/// Navigator that only records where it was sent
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Vec<Route>,
}

impl RecordingNavigator {
    /// Empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes visited, oldest first
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Last route visited
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.history.last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        crate::debug!("navigate -> {route}");
        self.history.push(route);
    }
}

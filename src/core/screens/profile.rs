//! Profile screen and the logout flow

use super::{Stat, GUEST_NAME};
use crate::core::identity::{AuthState, IdentityError, IdentityProvider};
use crate::core::navigation::{Navigator, Route};
use crate::core::render::{MenuView, ProfileView, StatView};
use crate::{get_version, info, warn};

/// Email shown when nobody is signed in
pub const FALLBACK_EMAIL: &str = "student@eljunior.com";

/// Title of the logout confirmation
pub const LOGOUT_TITLE: &str = "Выход";

/// Question asked before logging out
pub const LOGOUT_MESSAGE: &str = "Вы уверены, что хотите выйти?";

/// Yes/no dialog shown before destructive actions
pub trait Confirm {
    /// Ask the user; `true` means proceed
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str, &str) -> bool,
{
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self(title, message)
    }
}

/// How a logout attempt ended, when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The user declined the confirmation; nothing changed
    Cancelled,
    /// The session ended and the login screen was requested
    LoggedOut,
}

/// Profile menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Entry title
    pub title: &'static str,
    /// Entry subtitle
    pub subtitle: &'static str,
}

/// Profile screen
#[derive(Debug, Clone, Default)]
pub struct ProfileScreen {
    auth: AuthState,
}

impl ProfileScreen {
    /// Open the screen for whoever the provider reports
    #[must_use]
    pub fn load(identity: &dyn IdentityProvider) -> Self {
        Self::new(AuthState::resolve(identity))
    }

    /// Screen for an explicit auth state
    #[must_use]
    pub const fn new(auth: AuthState) -> Self {
        Self { auth }
    }

    /// Who is signed in
    #[must_use]
    pub const fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Local part of the account email, or a generic name
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.auth
            .identity()
            .and_then(|identity| identity.handle())
            .unwrap_or(GUEST_NAME)
    }

    /// Account email, or the placeholder address
    #[must_use]
    pub fn email(&self) -> &str {
        self.auth
            .identity()
            .map_or(FALLBACK_EMAIL, |identity| identity.email.as_str())
    }

    /// Personal counters
    #[must_use]
    pub fn stats() -> [Stat; 3] {
        [
            Stat::new("Курсов", "12"),
            Stat::new("Часов", "48"),
            Stat::new("Наград", "8"),
        ]
    }

    /// Menu entries above the logout button
    #[must_use]
    pub const fn menu() -> [MenuItem; 3] {
        [
            MenuItem {
                title: "Настройки",
                subtitle: "Управление аккаунтом",
            },
            MenuItem {
                title: "Уведомления",
                subtitle: "Настройки оповещений",
            },
            MenuItem {
                title: "Помощь и поддержка",
                subtitle: "FAQ и контакты",
            },
        ]
    }

    /// Version line in the footer
    #[must_use]
    pub fn app_info() -> String {
        format!("ElJunior v{}", get_version())
    }

    /// Log out after confirmation.
    ///
    /// Declining leaves everything untouched. On success the screen becomes
    /// anonymous and the navigator is sent to the login route.
    ///
    /// # Errors
    /// Returns the provider's error when it refuses to end the session; the
    /// screen state is unchanged in that case
    pub fn logout(
        &mut self,
        confirm: &mut dyn Confirm,
        identity: &mut dyn IdentityProvider,
        navigator: &mut dyn Navigator,
    ) -> Result<LogoutOutcome, IdentityError> {
        if !confirm.confirm(LOGOUT_TITLE, LOGOUT_MESSAGE) {
            info!("Logout cancelled");
            return Ok(LogoutOutcome::Cancelled);
        }
        if let Err(err) = identity.logout() {
            warn!("Logout failed: {err}");
            return Err(err);
        }
        self.auth = AuthState::Anonymous;
        navigator.navigate(Route::Login);
        Ok(LogoutOutcome::LoggedOut)
    }

    /// Display model for the renderer
    #[must_use]
    pub fn view(&self) -> ProfileView {
        ProfileView {
            name: self.display_name().to_string(),
            email: self.email().to_string(),
            stats: Self::stats().iter().map(StatView::from).collect(),
            menu: Self::menu()
                .iter()
                .map(|item| MenuView {
                    title: item.title.to_string(),
                    subtitle: item.subtitle.to_string(),
                })
                .collect(),
            app_info: Self::app_info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{Identity, NoSession};
    use crate::core::navigation::RecordingNavigator;

    /// Provider whose logout can be told to fail
    struct FakeSession {
        signed_in: bool,
        refuse: bool,
    }

    impl IdentityProvider for FakeSession {
        fn current_user(&self) -> Result<Identity, IdentityError> {
            if self.signed_in {
                Ok(Identity::new("ivan.petrov@eljunior.com"))
            } else {
                Err(IdentityError::NotAuthenticated)
            }
        }

        fn logout(&mut self) -> Result<(), IdentityError> {
            if self.refuse {
                return Err(IdentityError::Rejected("network down".to_string()));
            }
            self.signed_in = false;
            Ok(())
        }
    }

    #[test]
    fn test_anonymous_profile() {
        let screen = ProfileScreen::load(&NoSession);
        assert_eq!(screen.display_name(), "Студент");
        assert_eq!(screen.email(), FALLBACK_EMAIL);
    }

    #[test]
    fn test_signed_in_profile() {
        let session = FakeSession {
            signed_in: true,
            refuse: false,
        };
        let screen = ProfileScreen::load(&session);
        assert_eq!(screen.display_name(), "ivan.petrov");
        assert_eq!(screen.email(), "ivan.petrov@eljunior.com");
    }

    #[test]
    fn test_logout_cancelled() {
        let mut session = FakeSession {
            signed_in: true,
            refuse: false,
        };
        let mut screen = ProfileScreen::load(&session);
        let mut nav = RecordingNavigator::new();
        let mut asked = Vec::new();
        let mut decline = |title: &str, message: &str| {
            asked.push((title.to_string(), message.to_string()));
            false
        };

        let outcome = screen.logout(&mut decline, &mut session, &mut nav).unwrap();

        assert_eq!(outcome, LogoutOutcome::Cancelled);
        assert!(session.signed_in);
        assert!(nav.history().is_empty());
        assert!(screen.auth().is_authenticated());
        assert_eq!(asked, [(LOGOUT_TITLE.to_string(), LOGOUT_MESSAGE.to_string())]);
    }

    #[test]
    fn test_logout_rejected() {
        let mut session = FakeSession {
            signed_in: true,
            refuse: true,
        };
        let mut screen = ProfileScreen::load(&session);
        let mut nav = RecordingNavigator::new();

        let err = screen
            .logout(&mut |_: &str, _: &str| true, &mut session, &mut nav)
            .unwrap_err();

        assert_eq!(err, IdentityError::Rejected("network down".to_string()));
        assert!(nav.history().is_empty());
        assert!(screen.auth().is_authenticated());
    }

    #[test]
    fn test_logout_success() {
        let mut session = FakeSession {
            signed_in: true,
            refuse: false,
        };
        let mut screen = ProfileScreen::load(&session);
        let mut nav = RecordingNavigator::new();

        let outcome = screen
            .logout(&mut |_: &str, _: &str| true, &mut session, &mut nav)
            .unwrap();

        assert_eq!(outcome, LogoutOutcome::LoggedOut);
        assert!(!session.signed_in);
        assert_eq!(nav.current(), Some(Route::Login));
        assert_eq!(screen.email(), FALLBACK_EMAIL);
    }

    #[test]
    fn test_view() {
        let view = ProfileScreen::default().view();
        assert_eq!(view.menu.len(), 3);
        assert_eq!(view.stats[2].label, "Наград");
        assert!(view.app_info.starts_with("ElJunior v"));
    }
}

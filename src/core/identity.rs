//! Identity provider boundary
//!
//! The session service is a black box: it either hands back the signed-in
//! user or fails. Screens never see anything in between; they work with
//! [`AuthState`].

use crate::core::config::Config;
use crate::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account email
    pub email: String,
}

impl Identity {
    /// Create an identity record
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Part of the email before `@`, if non-empty
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        let local = self.email.split('@').next().unwrap_or_default().trim();
        (!local.is_empty()).then_some(local)
    }
}

/// Failures reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// No active session
    #[error("not authenticated")]
    NotAuthenticated,
    /// The provider refused or failed the request
    #[error("identity provider rejected the request: {0}")]
    Rejected(String),
}

/// Session operations offered by the identity provider
pub trait IdentityProvider {
    /// Current user
    ///
    /// # Errors
    /// `NotAuthenticated` when nobody is signed in, `Rejected` on provider failure
    fn current_user(&self) -> Result<Identity, IdentityError>;

    /// End the session
    ///
    /// # Errors
    /// `Rejected` when the session could not be terminated; callers must
    /// surface this to the user
    fn logout(&mut self) -> Result<(), IdentityError>;
}

/// What a screen knows about the user: signed in with an identity, or not
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Signed in
    Authenticated(Identity),
    /// Not signed in, or the provider could not tell
    #[default]
    Anonymous,
}

impl AuthState {
    /// Ask the provider for the current user. Any failure counts as anonymous.
    pub fn resolve(provider: &dyn IdentityProvider) -> Self {
        match provider.current_user() {
            Ok(identity) => Self::Authenticated(identity),
            Err(err) => {
                info!("Continuing without a user: {err}");
                Self::Anonymous
            }
        }
    }

    /// Identity, when signed in
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }

    /// Whether someone is signed in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Provider with nobody signed in
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

impl IdentityProvider for NoSession {
    fn current_user(&self) -> Result<Identity, IdentityError> {
        Err(IdentityError::NotAuthenticated)
    }

    fn logout(&mut self) -> Result<(), IdentityError> {
        Err(IdentityError::NotAuthenticated)
    }
}

/// Provider backed by the `identity.email` config value.
///
/// A non-empty email means a signed-in user. Logging out clears the email
/// and, when a config path is attached, clears it in that file too. Only the
/// stored email changes; the rest of the file is written back as found, so
/// per-run overrides held in memory never reach the disk.
#[derive(Debug, Clone)]
pub struct ConfiguredIdentity {
    config: Config,
    persist_to: Option<PathBuf>,
}

impl ConfiguredIdentity {
    /// Provider that only changes the in-memory config
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            persist_to: None,
        }
    }

    /// Provider that also clears the email stored at `path` on logout
    #[must_use]
    pub fn persisted(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            persist_to: Some(path.into()),
        }
    }

    /// Config as currently held by the provider
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

impl IdentityProvider for ConfiguredIdentity {
    fn current_user(&self) -> Result<Identity, IdentityError> {
        let email = self.config.identity.email.trim();
        if email.is_empty() {
            Err(IdentityError::NotAuthenticated)
        } else {
            Ok(Identity::new(email))
        }
    }

    fn logout(&mut self) -> Result<(), IdentityError> {
        if self.config.identity.email.trim().is_empty() {
            return Err(IdentityError::NotAuthenticated);
        }
        let previous = std::mem::take(&mut self.config.identity.email);
        if let Some(path) = &self.persist_to {
            if let Err(err) = clear_stored_email(path) {
                self.config.identity.email = previous;
                return Err(IdentityError::Rejected(format!(
                    "could not save session state: {err}"
                )));
            }
        }
        info!("Session for {previous} closed");
        Ok(())
    }
}

/// Rewrite the config file at `path` with an empty `identity.email`. A
/// missing file starts from the defaults; an unreadable one is left alone.
fn clear_stored_email(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut stored = if path.exists() {
        Config::from_toml(&fs::read_to_string(path)?)?
    } else {
        Config::from_defaults()
    };
    stored.identity.email.clear();
    stored.save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(email: &str) -> Config {
        let mut config = Config::default();
        config.identity.email = email.to_string();
        config
    }

    #[test]
    fn test_handle() {
        assert_eq!(Identity::new("anna@eljunior.com").handle(), Some("anna"));
        assert_eq!(Identity::new("plain").handle(), Some("plain"));
        assert_eq!(Identity::new("@eljunior.com").handle(), None);
        assert_eq!(Identity::new("").handle(), None);
    }

    #[test]
    fn test_resolve_authenticated() {
        let provider = ConfiguredIdentity::new(config_with("anna@eljunior.com"));
        let state = AuthState::resolve(&provider);
        assert!(state.is_authenticated());
        assert_eq!(state.identity().unwrap().email, "anna@eljunior.com");
    }

    #[test]
    fn test_resolve_failure_is_anonymous() {
        assert_eq!(AuthState::resolve(&NoSession), AuthState::Anonymous);
        let blank = ConfiguredIdentity::new(config_with("   "));
        assert_eq!(AuthState::resolve(&blank), AuthState::Anonymous);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut provider = ConfiguredIdentity::new(config_with("anna@eljunior.com"));
        provider.logout().unwrap();
        assert_eq!(provider.current_user(), Err(IdentityError::NotAuthenticated));
        assert_eq!(provider.logout(), Err(IdentityError::NotAuthenticated));
    }

    #[test]
    fn test_logout_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut provider = ConfiguredIdentity::persisted(config_with("anna@eljunior.com"), &path);
        provider.logout().unwrap();

        let saved = Config::from_toml(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(saved.identity.email.is_empty());
    }

    #[test]
    fn test_logout_leaves_unreadable_file_alone() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let mut provider = ConfiguredIdentity::persisted(config_with("anna@eljunior.com"), &path);
        assert!(matches!(provider.logout(), Err(IdentityError::Rejected(_))));
        assert!(provider.current_user().is_ok());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "this is = = not toml");
    }
}

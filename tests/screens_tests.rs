//! Integration tests for screen state: home, catalog, profile and progress

use eljunior::config::{Config, ConfigOverrides};
use eljunior::core::catalog::SampleCatalog;
use eljunior::core::identity::{AuthState, ConfiguredIdentity, IdentityProvider, NoSession};
use eljunior::core::models::{Category, CategorySelector};
use eljunior::core::navigation::{RecordingNavigator, Route};
use eljunior::core::screens::{
    CatalogScreen, HomeScreen, LogoutOutcome, ProfileScreen, ProgressScreen,
};
use tempfile::TempDir;

fn signed_in_config(email: &str) -> Config {
    let mut config = Config::default();
    config.identity.email = email.to_string();
    config
}

#[test]
fn catalog_screen_starts_unfiltered() {
    let screen = CatalogScreen::load(&SampleCatalog).unwrap();
    assert_eq!(screen.selection().category(), CategorySelector::All);
    assert_eq!(screen.selection().query(), "");
    assert_eq!(screen.visible().len(), 6);
}

#[test]
fn catalog_screen_chip_and_search() {
    let mut screen = CatalogScreen::load(&SampleCatalog).unwrap();
    screen.select_category(Category::Design.into());
    screen.set_query("ДИЗАЙН");

    let view = screen.view();
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].instructor, "Мария Иванова");
    let active: Vec<_> = view.chips.iter().filter(|c| c.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].key, "design");
}

#[test]
fn home_screen_for_configured_user() {
    let identity = ConfiguredIdentity::new(signed_in_config("anna@eljunior.com"));
    let screen = HomeScreen::load(&SampleCatalog, &identity).unwrap();
    assert_eq!(screen.greeting_name(), "anna@eljunior.com");
    assert_eq!(screen.visible_featured().len(), 3);
}

#[test]
fn home_search_filters_featured() {
    let mut screen = HomeScreen::load(&SampleCatalog, &NoSession).unwrap();
    screen.set_query("веб");
    let view = screen.view();
    assert_eq!(view.featured.len(), 1);
    assert_eq!(view.featured[0].category, "Веб-разработка");
    assert_eq!(view.query, "веб");
}

#[test]
fn home_course_tap_opens_catalog() {
    let screen = HomeScreen::load(&SampleCatalog, &NoSession).unwrap();
    let mut nav = RecordingNavigator::new();
    assert!(screen.open_course("1", &mut nav));
    assert_eq!(nav.current(), Some(Route::Courses));
    assert_eq!(Route::Courses.path(), "/(tabs)/courses");
}

#[test]
fn profile_logout_persists_and_navigates() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = dir.path().join("config.toml");
    let config = signed_in_config("ivan@eljunior.com");
    config.save_to(&config_file).unwrap();

    let mut identity = ConfiguredIdentity::persisted(config, &config_file);
    let mut screen = ProfileScreen::load(&identity);
    assert_eq!(screen.display_name(), "ivan");

    let mut nav = RecordingNavigator::new();
    let outcome = screen
        .logout(&mut |_: &str, _: &str| true, &mut identity, &mut nav)
        .unwrap();

    assert_eq!(outcome, LogoutOutcome::LoggedOut);
    assert_eq!(nav.history(), [Route::Login]);
    assert_eq!(*screen.auth(), AuthState::Anonymous);
    assert!(identity.current_user().is_err());
    assert_eq!(Config::load_from(&config_file).identity.email, "");
}

#[test]
fn logout_does_not_save_run_only_overrides() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = dir.path().join("config.toml");
    let mut stored = Config::from_defaults();
    stored.set("level", "warn").unwrap();
    stored.set("email", "ivan@eljunior.com").unwrap();
    stored.save_to(&config_file).unwrap();

    // Same order as the binary: load, then apply command-line overrides
    let mut config = Config::load_from(&config_file);
    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        catalog_file: Some("/tmp/one-off.toml".to_string()),
        ..Default::default()
    });

    let mut identity = ConfiguredIdentity::persisted(config, &config_file);
    let mut screen = ProfileScreen::load(&identity);
    let mut nav = RecordingNavigator::new();
    let outcome = screen
        .logout(&mut |_: &str, _: &str| true, &mut identity, &mut nav)
        .unwrap();
    assert_eq!(outcome, LogoutOutcome::LoggedOut);
    assert_eq!(identity.config().logging.level, "debug");

    let reloaded = Config::load_from(&config_file);
    assert_eq!(reloaded.identity.email, "");
    assert_eq!(reloaded.logging.level, "warn");
    assert_eq!(reloaded.catalog.file, "");
}

#[test]
fn profile_logout_declined_keeps_session() {
    let mut identity = ConfiguredIdentity::new(signed_in_config("ivan@eljunior.com"));
    let mut screen = ProfileScreen::load(&identity);
    let mut nav = RecordingNavigator::new();

    let outcome = screen
        .logout(&mut |_: &str, _: &str| false, &mut identity, &mut nav)
        .unwrap();

    assert_eq!(outcome, LogoutOutcome::Cancelled);
    assert!(identity.current_user().is_ok());
    assert!(nav.history().is_empty());
}

#[test]
fn profile_logout_without_session_is_rejected() {
    let mut identity = ConfiguredIdentity::new(Config::default());
    let mut screen = ProfileScreen::load(&identity);
    let mut nav = RecordingNavigator::new();

    let result = screen.logout(&mut |_: &str, _: &str| true, &mut identity, &mut nav);

    assert!(result.is_err());
    assert!(nav.history().is_empty());
}

#[test]
fn progress_sample_summary() {
    let screen = ProgressScreen::sample().unwrap();
    assert_eq!(screen.overview().streak_days, 7);
    assert_eq!(screen.week().days().len(), 7);
    assert_eq!(screen.unlocked_count() + screen.locked_count(), 4);
    assert_eq!(screen.most_active_day().map(|d| d.percent), Some(100));
    assert_eq!(screen.average_progress(), 63);
    assert_eq!(screen.courses()[2].lessons.to_string(), "16/20");
}

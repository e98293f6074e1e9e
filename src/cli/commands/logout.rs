//! Logout command handler

use super::config::ask_yes_no;
use eljunior::config::Config;
use eljunior::core::identity::ConfiguredIdentity;
use eljunior::core::navigation::RecordingNavigator;
use eljunior::core::screens::{LogoutOutcome, ProfileScreen};
use eljunior::{error, info};

/// Run the logout command: confirm, clear the stored email, and report the
/// route the app would show next
pub fn run(yes: bool, config: &Config) {
    let mut identity = ConfiguredIdentity::persisted(config.clone(), Config::get_config_file_path());
    let mut screen = ProfileScreen::load(&identity);
    if !screen.auth().is_authenticated() {
        println!("✓ Not signed in");
        return;
    }

    let mut navigator = RecordingNavigator::new();
    let mut confirm = |title: &str, message: &str| {
        if yes {
            return true;
        }
        println!("{title}");
        ask_yes_no(message)
    };

    match screen.logout(&mut confirm, &mut identity, &mut navigator) {
        Ok(LogoutOutcome::Cancelled) => println!("✗ Logout cancelled"),
        Ok(LogoutOutcome::LoggedOut) => {
            println!("✓ Logged out");
            if let Some(route) = navigator.current() {
                info!("Navigated to {route}");
                println!("  Next screen: {route}");
            }
        }
        Err(err) => {
            error!("Logout failed: {err}");
            eprintln!("✗ Logout failed: {err}");
            std::process::exit(1);
        }
    }
}

// Interactive menu layer. Every component error is caught here, reported,
// and control returns to the loop; quitting from the menu is the only way
// the process ends in normal operation.

mod auth_menu;
mod main_menu;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::ExerciseApiClient;
use crate::auth::CredentialStore;
use crate::config::Config;
use crate::storage::ProfileStore;

/// Top-level application loop: authenticate, run the main menu, repeat on
/// logout, end on explicit exit.
pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let data_dir = config.data_dir()?;

    let credentials = CredentialStore::open(&data_dir);
    let profiles = ProfileStore::open(&data_dir);
    let api = ExerciseApiClient::new(&config)?;

    println!();
    println!("{}", style("Welcome to Fitness World").bold());

    loop {
        match auth_menu::run(&credentials, &profiles)? {
            Some(session) => main_menu::run(&session, &profiles, &api, &config).await?,
            None => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

pub(crate) fn report_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub(crate) fn report_failure(message: &str) {
    println!("{} {}", style("✗").red(), message);
}

pub(crate) fn report_notice(message: &str) {
    println!("{} {}", style("!").yellow(), message);
}

/// Spinner shown while a blocking lookup is in flight
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_message(message.to_string());
    bar
}

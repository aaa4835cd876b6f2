use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Password, Select};

use crate::auth::validate::{
    validate_age, validate_name, validate_password, validate_username, validate_weight,
};
use crate::auth::{AuthError, CredentialStore, Session};
use crate::menu::{report_failure, report_success};
use crate::models::UserProfile;
use crate::storage::ProfileStore;

/// Authentication menu: loops until a session is established or the user
/// exits. Recoverable errors (bad credentials, invalid input) re-prompt
/// rather than ending the flow.
pub fn run(
    credentials: &CredentialStore,
    profiles: &ProfileStore,
) -> Result<Option<Session>> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Fitness World")
            .items(&["Login", "Create account", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => match handle_login(credentials, profiles) {
                Ok(Some(session)) => return Ok(Some(session)),
                Ok(None) => {}
                Err(error) => report_failure(&format!("Login error: {:#}", error)),
            },
            1 => match handle_signup(credentials, profiles) {
                Ok(session) => return Ok(Some(session)),
                Err(error) => report_failure(&format!("Signup error: {:#}", error)),
            },
            _ => return Ok(None),
        }
    }
}

/// Prompt for credentials and authenticate. An unknown username offers to
/// switch straight into signup.
fn handle_login(
    credentials: &CredentialStore,
    profiles: &ProfileStore,
) -> Result<Option<Session>> {
    println!();
    println!("{}", style("Login").bold());

    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let username = username.trim().to_lowercase();

    let password = Password::new().with_prompt("Password").interact()?;

    match credentials.authenticate(&username, &password) {
        Ok(()) => {}
        Err(AuthError::UnknownUser) => {
            report_failure("Username not found");
            let create = Confirm::new()
                .with_prompt("Would you like to create an account?")
                .default(false)
                .interact()?;
            if create {
                return handle_signup(credentials, profiles).map(Some);
            }
            return Ok(None);
        }
        Err(AuthError::WrongPassword) => {
            report_failure("Invalid password");
            return Ok(None);
        }
        Err(error) => return Err(error.into()),
    }

    let session = open_session(&username, profiles)?;
    report_success(&format!("Welcome back, {}!", session.display_name));
    Ok(Some(session))
}

/// Interactive account creation. Every field validator loops in place on
/// invalid input; the flow only ends with a created account.
fn handle_signup(credentials: &CredentialStore, profiles: &ProfileStore) -> Result<Session> {
    println!();
    println!("{}", style("Create account").bold());

    let username = prompt_username(credentials)?;
    let password = prompt_password()?;

    let name_input: String = Input::new()
        .with_prompt("Full name")
        .validate_with(|input: &String| validate_name(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    let name = validate_name(&name_input).map_err(anyhow::Error::from)?;

    let age_input: String = Input::new()
        .with_prompt("Age")
        .validate_with(|input: &String| validate_age(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    let age = validate_age(&age_input).map_err(anyhow::Error::from)?;

    let weight_input: String = Input::new()
        .with_prompt("Current weight (kg)")
        .validate_with(|input: &String| {
            validate_weight(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    let weight = validate_weight(&weight_input).map_err(anyhow::Error::from)?;

    let target_weight = if Confirm::new()
        .with_prompt("Set a target weight?")
        .default(false)
        .interact()?
    {
        let input: String = Input::new()
            .with_prompt("Target weight (kg)")
            .validate_with(|input: &String| {
                validate_weight(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Some(validate_weight(&input).map_err(anyhow::Error::from)?)
    } else {
        None
    };

    credentials.register(&username, &password)?;

    let profile = UserProfile::new(username.clone(), name, age, weight, target_weight);
    profiles.create(profile.clone())?;

    report_success(&format!(
        "Account created, welcome to Fitness World, {}!",
        profile.name
    ));

    // Signup logs the new user straight in
    Ok(Session::new(username, profile.name))
}

fn prompt_username(credentials: &CredentialStore) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Username (3-20 letters/numbers)")
            .validate_with(|input: &String| {
                validate_username(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let username = match validate_username(&input) {
            Ok(cleaned) => cleaned,
            Err(error) => {
                report_failure(&error.to_string());
                continue;
            }
        };

        if credentials.exists(&username)? {
            report_failure("Username already exists, please choose another");
            continue;
        }

        return Ok(username);
    }
}

fn prompt_password() -> Result<String> {
    loop {
        let password = Password::new()
            .with_prompt("Password (min 6 characters)")
            .with_confirmation("Confirm password", "Passwords don't match, try again")
            .interact()?;

        match validate_password(&password) {
            Ok(()) => return Ok(password),
            Err(error) => report_failure(&error.to_string()),
        }
    }
}

/// Build the session for an authenticated user and stamp their last login.
fn open_session(username: &str, profiles: &ProfileStore) -> Result<Session> {
    let display_name = match profiles.update(username, UserProfile::touch_last_login) {
        Ok(profile) => profile.name,
        Err(error) => {
            // Last-login bookkeeping must not block login
            tracing::warn!("Could not update profile for {}: {:#}", username, error);
            username.to_string()
        }
    };

    Ok(Session::new(username.to_string(), display_name))
}

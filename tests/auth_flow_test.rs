use anyhow::Result;
use fitness_world::auth::validate::{
    validate_age, validate_password, validate_username, validate_weight,
};
use fitness_world::auth::{AuthError, CredentialStore};
use tempfile::tempdir;

#[test]
fn test_signup_then_login_scenario() -> Result<()> {
    let dir = tempdir()?;
    let store = CredentialStore::open(dir.path());

    store.register("alice", "ValidPass1")?;

    let wrong = store.authenticate("alice", "wrong");
    assert!(matches!(wrong, Err(AuthError::WrongPassword)));

    store.authenticate("alice", "ValidPass1")?;
    Ok(())
}

#[test]
fn test_unknown_user_is_distinguished_from_wrong_password() -> Result<()> {
    let dir = tempdir()?;
    let store = CredentialStore::open(dir.path());

    store.register("alice", "ValidPass1")?;

    assert!(matches!(
        store.authenticate("bob", "ValidPass1"),
        Err(AuthError::UnknownUser)
    ));
    assert!(matches!(
        store.authenticate("alice", "ValidPass2"),
        Err(AuthError::WrongPassword)
    ));
    Ok(())
}

#[test]
fn test_duplicate_registration_rejected() -> Result<()> {
    let dir = tempdir()?;
    let store = CredentialStore::open(dir.path());

    store.register("alice", "ValidPass1")?;
    assert!(matches!(
        store.register("alice", "Different2"),
        Err(AuthError::DuplicateUsername)
    ));

    // The original credentials still work
    store.authenticate("alice", "ValidPass1")?;
    Ok(())
}

#[test]
fn test_credentials_survive_reopen() -> Result<()> {
    let dir = tempdir()?;

    {
        let store = CredentialStore::open(dir.path());
        store.register("alice", "ValidPass1")?;
    }

    let reopened = CredentialStore::open(dir.path());
    reopened.authenticate("alice", "ValidPass1")?;
    Ok(())
}

// The signup prompts loop on these validators instead of aborting; every
// invalid input must come back as a recoverable error, never a panic.
#[test]
fn test_invalid_signup_input_is_always_recoverable() {
    for password in ["", "a", "12345", "     "] {
        assert!(validate_password(password).is_err());
    }
    for username in ["", "ab", "has space", "dash-ed", "x"] {
        assert!(validate_username(username).is_err());
    }
    for age in ["", "abc", "-5", "12", "101"] {
        assert!(validate_age(age).is_err());
    }
    for weight in ["", "two", "2", "0", "1001"] {
        assert!(validate_weight(weight).is_err());
    }

    // And valid inputs pass unchanged
    assert!(validate_password("ValidPass1").is_ok());
    assert_eq!(validate_username("Alice").unwrap(), "alice");
    assert_eq!(validate_age("30").unwrap(), 30);
    assert_eq!(validate_weight("70.5").unwrap(), 70.5);
}

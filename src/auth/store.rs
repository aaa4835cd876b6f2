use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::auth::errors::AuthError;
use crate::auth::password::{hash_password, verify_password};
use crate::storage::json;

const USERS_FILE: &str = "users.json";

/// One stored credential record. The password is kept only as a bcrypt hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Credential store backed by a JSON array of credential records.
///
/// All operations are full-document read-modify-write; a single active
/// writer per process is assumed.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(USERS_FILE),
        }
    }

    /// Register a new user. The username must be unique across the store.
    pub fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let mut credentials = self.load_all()?;

        if credentials.iter().any(|c| c.username == username) {
            return Err(AuthError::DuplicateUsername);
        }

        let credential = Credential {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
        };

        credentials.push(credential);
        self.save_all(&credentials)?;

        tracing::info!("Registered user {}", username);
        Ok(())
    }

    /// Check a username/password pair against the store.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let credentials = self.load_all()?;

        let credential = credentials
            .iter()
            .find(|c| c.username == username)
            .ok_or(AuthError::UnknownUser)?;

        if !verify_password(password, &credential.password_hash)? {
            return Err(AuthError::WrongPassword);
        }

        tracing::debug!("Authenticated user {}", username);
        Ok(())
    }

    /// Whether a username is already taken
    pub fn exists(&self, username: &str) -> Result<bool, AuthError> {
        let credentials = self.load_all()?;
        Ok(credentials.iter().any(|c| c.username == username))
    }

    fn load_all(&self) -> anyhow::Result<Vec<Credential>> {
        json::read_or_default(&self.path)
    }

    fn save_all(&self, credentials: &[Credential]) -> anyhow::Result<()> {
        json::write_atomic(&self.path, &credentials)
    }
}

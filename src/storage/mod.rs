// Profile persistence over a single JSON document, full-document
// read-modify-write. One active writer per process is assumed.

pub mod json;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::UserProfile;

const PROFILES_FILE: &str = "profiles.json";

/// Store for per-user profile documents, keyed by username.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PROFILES_FILE),
        }
    }

    /// Load one user's profile document
    pub fn load(&self, username: &str) -> Result<Option<UserProfile>> {
        let profiles = self.load_all()?;
        Ok(profiles.get(username).cloned())
    }

    /// Write a profile back, replacing the stored document for that user
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let mut profiles = self.load_all()?;
        profiles.insert(profile.username.clone(), profile.clone());
        self.save_all(&profiles)?;

        tracing::debug!("Saved profile for {}", profile.username);
        Ok(())
    }

    /// Insert a brand-new profile; fails if the username already has one
    pub fn create(&self, profile: UserProfile) -> Result<()> {
        let mut profiles = self.load_all()?;

        if profiles.contains_key(&profile.username) {
            anyhow::bail!("Profile for {} already exists", profile.username);
        }

        tracing::info!("Created profile for {}", profile.username);
        profiles.insert(profile.username.clone(), profile);
        self.save_all(&profiles)
    }

    /// Load, apply a mutation, and write back in one step. Returns the
    /// updated profile.
    pub fn update<F>(&self, username: &str, mutate: F) -> Result<UserProfile>
    where
        F: FnOnce(&mut UserProfile),
    {
        let mut profiles = self.load_all()?;

        let profile = profiles
            .get_mut(username)
            .with_context(|| format!("Profile for {} not found", username))?;

        mutate(profile);
        let updated = profile.clone();

        self.save_all(&profiles)?;

        tracing::debug!("Updated profile for {}", username);
        Ok(updated)
    }

    fn load_all(&self) -> Result<BTreeMap<String, UserProfile>> {
        json::read_or_default(&self.path)
    }

    fn save_all(&self, profiles: &BTreeMap<String, UserProfile>) -> Result<()> {
        json::write_atomic(&self.path, profiles)
    }
}

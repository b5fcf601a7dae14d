//! Inspector configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use foxsession_storage::{discover_profiles, firefox_dir, select_profile, Profile, StorageError};

use crate::Result;

pub const ENV_SESSION_FILE: &str = "FOXSESSION_FILE";
pub const ENV_FIREFOX_DIR: &str = "FOXSESSION_FIREFOX_DIR";
pub const ENV_PROFILE: &str = "FOXSESSION_PROFILE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Explicit snapshot file; skips profile discovery when set
    pub session_file: Option<PathBuf>,
    /// Overrides the platform Firefox directory
    pub firefox_dir: Option<PathBuf>,
    /// Profile name from `profiles.ini`; the default profile when unset
    pub profile: Option<String>,
    #[serde(default)]
    pub limits: ReportLimits,
}

/// How much of each window the report prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLimits {
    /// Tabs listed per window
    pub max_tabs: usize,
    /// Characters of the pretty-printed groups
    pub groups_chars: usize,
    /// Characters of each tab URL
    pub url_chars: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            max_tabs: 5,
            groups_chars: 2000,
            url_chars: 80,
        }
    }
}

impl Config {
    /// Build from `FOXSESSION_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            session_file: get(ENV_SESSION_FILE).map(PathBuf::from),
            firefox_dir: get(ENV_FIREFOX_DIR).map(PathBuf::from),
            profile: get(ENV_PROFILE),
            limits: ReportLimits::default(),
        }
    }

    pub fn with_session_file(mut self, path: PathBuf) -> Self {
        self.session_file = Some(path);
        self
    }

    /// Profiles of the configured Firefox directory that hold a snapshot
    pub fn profiles(&self) -> Result<Vec<Profile>> {
        let dir = self
            .firefox_dir
            .clone()
            .or_else(firefox_dir)
            .ok_or(StorageError::NoFirefoxDir)?;

        let profiles = discover_profiles(&dir)?;
        if profiles.is_empty() {
            return Err(StorageError::NoProfile.into());
        }
        Ok(profiles)
    }

    /// Resolve which snapshot file to read
    pub fn session_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.session_file {
            return Ok(path.clone());
        }

        let profiles = self.profiles()?;
        let profile = select_profile(&profiles, self.profile.as_deref())?;
        let path = profile
            .session_file()
            .ok_or_else(|| StorageError::NoSessionFile(profile.backup_dir()))?;

        tracing::info!(
            profile = %profile.name,
            path = %path.display(),
            "Located session file"
        );

        Ok(path)
    }
}

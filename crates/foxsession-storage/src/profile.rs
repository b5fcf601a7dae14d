//! Firefox profile discovery
//!
//! Profiles are listed in `profiles.ini` under the platform Firefox
//! directory. Each profile keeps its session snapshots in
//! `sessionstore-backups/`.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::Result;

/// Snapshot files in order of preference: the live session first, then the
/// one saved at the last shutdown
const SESSION_FILE_NAMES: [&str; 2] = ["recovery.jsonlz4", "previous.jsonlz4"];

const BACKUP_DIR: &str = "sessionstore-backups";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Name shown in the profile manager
    pub name: String,
    /// Absolute path to the profile directory
    pub path: PathBuf,
    pub is_default: bool,
    /// Whether `profiles.ini` stored the path relative to the Firefox directory
    pub is_relative: bool,
}

impl Profile {
    pub fn backup_dir(&self) -> PathBuf {
        self.path.join(BACKUP_DIR)
    }

    /// First existing snapshot file of this profile
    pub fn session_file(&self) -> Option<PathBuf> {
        let backup_dir = self.backup_dir();
        SESSION_FILE_NAMES
            .iter()
            .map(|name| backup_dir.join(name))
            .find(|path| path.is_file())
    }
}

/// Platform Firefox directory, the one holding `profiles.ini`
pub fn firefox_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join(".mozilla/firefox"))
    }
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join("Library/Application Support/Firefox"))
    }
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|d| PathBuf::from(d).join("Mozilla").join("Firefox"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        None
    }
}

/// Read every `[Profile*]` section of `profiles.ini`.
///
/// Relative paths are resolved against `firefox_dir`. Profiles are returned
/// whether or not they hold a session file.
pub fn parse_profiles_ini(ini_path: &Path, firefox_dir: &Path) -> Result<Vec<Profile>> {
    let text = std::fs::read_to_string(ini_path).map_err(|source| StorageError::Io {
        path: ini_path.to_path_buf(),
        source,
    })?;

    let mut profiles = parse_profiles(&text);
    for profile in &mut profiles {
        if profile.is_relative {
            profile.path = firefox_dir.join(&profile.path);
        }
    }

    tracing::debug!(
        ini = %ini_path.display(),
        count = profiles.len(),
        "Parsed profiles.ini"
    );

    Ok(profiles)
}

fn parse_profiles(text: &str) -> Vec<Profile> {
    let mut profiles = Vec::new();
    let mut current: Option<Profile> = None;

    for line in text.lines().map(str::trim) {
        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            profiles.extend(current.take());
            if section.starts_with("Profile") {
                current = Some(Profile::default());
            }
            continue;
        }

        let Some(profile) = current.as_mut() else {
            continue;
        };
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        match key {
            "Name" => profile.name = value.to_string(),
            "Path" => profile.path = PathBuf::from(value),
            "IsRelative" => profile.is_relative = value == "1",
            "Default" => profile.is_default = value == "1",
            _ => {}
        }
    }

    profiles.extend(current);
    profiles
}

/// Profiles under `firefox_dir` that have a session snapshot
pub fn discover_profiles(firefox_dir: &Path) -> Result<Vec<Profile>> {
    let ini_path = firefox_dir.join("profiles.ini");
    let usable: Vec<Profile> = parse_profiles_ini(&ini_path, firefox_dir)?
        .into_iter()
        .filter(|p| p.session_file().is_some())
        .collect();

    tracing::info!(
        firefox_dir = %firefox_dir.display(),
        usable = usable.len(),
        "Discovered Firefox profiles"
    );

    Ok(usable)
}

/// Pick a profile by name, or fall back to the default one, or the first
pub fn select_profile<'a>(profiles: &'a [Profile], name: Option<&str>) -> Result<&'a Profile> {
    if let Some(name) = name {
        return profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| StorageError::ProfileNotFound {
                name: name.to_string(),
                available: profiles.iter().map(|p| p.name.clone()).collect(),
            });
    }

    profiles
        .iter()
        .find(|p| p.is_default)
        .or_else(|| profiles.first())
        .ok_or(StorageError::NoProfile)
}

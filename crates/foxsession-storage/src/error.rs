//! Storage error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Could not determine the Firefox directory for this platform")]
    NoFirefoxDir,

    #[error("No Firefox profile has a session file")]
    NoProfile,

    #[error("Profile {name:?} not found. Available profiles: {}", .available.join(", "))]
    ProfileNotFound { name: String, available: Vec<String> },

    #[error("No session file found in {}", .0.display())]
    NoSessionFile(PathBuf),
}

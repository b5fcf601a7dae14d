//! foxsession storage layer
//!
//! Finds Firefox profiles on disk and reads their session snapshots.
//! Everything here is read-only.

mod error;
mod profile;
mod reader;

pub use error::StorageError;
pub use profile::{discover_profiles, firefox_dir, parse_profiles_ini, select_profile, Profile};
pub use reader::read_session_file;

pub type Result<T> = std::result::Result<T, StorageError>;

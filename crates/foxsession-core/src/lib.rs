//! foxsession Core
//!
//! Ties the pipeline together: locate a session file, read it, unwrap the
//! mozlz4 frame, parse the document and stream a short report.

mod config;
mod error;
mod inspector;
mod report;

pub use config::{Config, ReportLimits};
pub use error::CoreError;
pub use inspector::Inspector;
pub use report::{write_profiles, Reporter};

// Re-export the pipeline stages
pub use foxsession_mozlz4::{Frame, FrameError};
pub use foxsession_session::{Entry, Session, SessionError, Tab, Window};
pub use foxsession_storage::{Profile, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Logs go to stderr so stdout carries only the report.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] foxsession_storage::StorageError),

    #[error("Frame error: {0}")]
    Frame(#[from] foxsession_mozlz4::FrameError),

    #[error("Session error: {0}")]
    Session(#[from] foxsession_session::SessionError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

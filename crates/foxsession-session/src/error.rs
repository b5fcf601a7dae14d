//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Invalid session document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tab has {entries} entries but no index")]
    MissingIndex { entries: usize },

    #[error("Tab index {index} out of range for {entries} entries")]
    IndexOutOfRange { index: i64, entries: usize },
}

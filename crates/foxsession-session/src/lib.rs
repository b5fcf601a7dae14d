//! Firefox session document model
//!
//! Typed view over the JSON stored in `sessionstore-backups/*.jsonlz4`.
//! Only the fields the inspector reads are modelled; parts whose shape is
//! opaque to us (tab groups, a tab's `group`) stay as `serde_json::Value`.

mod error;
mod json;
mod session;
mod tab;

pub use error::SessionError;
pub use session::{Session, SessionMeta, Window};
pub use tab::{Entry, Tab};

pub type Result<T> = std::result::Result<T, SessionError>;

//! mozlz4 frame codec
//!
//! Firefox stores its session snapshots as a single LZ4 block wrapped in a
//! small fixed header:
//!
//! ```text
//! [8 bytes magic "mozLz40\0"][4 bytes LE u32 uncompressed size][LZ4 block]
//! ```
//!
//! The magic is carried but never enforced; only the size header and the
//! payload decide whether a frame decodes.

mod error;
mod frame;

pub use error::FrameError;
pub use frame::{decode, encode, Frame, HEADER_LEN, MAGIC};

pub type Result<T> = std::result::Result<T, FrameError>;

//! Frame error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Frame too short: {0} bytes, header needs 12")]
    TooShort(usize),

    #[error("LZ4 decompression failed: {0}")]
    Decompress(#[from] lz4_flex::block::DecompressError),

    #[error("Size mismatch: header declares {declared} bytes, payload produced {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("Input too large for a mozlz4 frame: {0} bytes")]
    TooLarge(usize),
}

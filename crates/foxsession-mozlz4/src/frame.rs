//! Fixed-layout mozlz4 frame

use crate::error::FrameError;
use crate::Result;

/// Magic written by Firefox in front of every `.jsonlz4` / `.mozlz4` file
pub const MAGIC: [u8; 8] = *b"mozLz40\0";

/// Magic plus the little-endian size field
pub const HEADER_LEN: usize = 12;

/// A borrowed view over a mozlz4 buffer, split into its three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// First 8 bytes, kept as found
    pub magic: [u8; 8],
    /// Size the payload must decompress to
    pub uncompressed_size: u32,
    /// Raw LZ4 block
    pub payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Split `data` into header fields and payload.
    ///
    /// Only the length is checked here. A foreign magic is logged and
    /// otherwise ignored.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(FrameError::TooShort(data.len()));
        }

        let (magic, rest) = data.split_at(8);
        let (size, payload) = rest.split_at(4);

        let mut magic_bytes = [0u8; 8];
        magic_bytes.copy_from_slice(magic);
        let mut size_bytes = [0u8; 4];
        size_bytes.copy_from_slice(size);

        let frame = Self {
            magic: magic_bytes,
            uncompressed_size: u32::from_le_bytes(size_bytes),
            payload,
        };

        if !frame.has_standard_magic() {
            tracing::warn!(
                magic = ?String::from_utf8_lossy(&frame.magic),
                "Unexpected mozlz4 magic, decoding anyway"
            );
        }

        Ok(frame)
    }

    pub fn has_standard_magic(&self) -> bool {
        self.magic == MAGIC
    }

    /// Decompress the payload into exactly `uncompressed_size` bytes
    pub fn decompress(&self) -> Result<Vec<u8>> {
        let declared = self.uncompressed_size as usize;
        let mut out = vec![0u8; declared];

        let written = lz4_flex::block::decompress_into(self.payload, &mut out)?;
        if written != declared {
            return Err(FrameError::SizeMismatch {
                declared,
                actual: written,
            });
        }

        tracing::debug!(
            compressed = self.payload.len(),
            decompressed = written,
            "Decoded mozlz4 frame"
        );

        Ok(out)
    }
}

/// Parse and decompress a complete mozlz4 buffer
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    Frame::parse(data)?.decompress()
}

/// Wrap `data` in a mozlz4 frame with the standard magic
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    let size = u32::try_from(data.len()).map_err(|_| FrameError::TooLarge(data.len()))?;
    let payload = lz4_flex::block::compress(data);

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&size.to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

//! Core types for bitmap decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for bitmap decoding operations.
///
/// Only [`DecodeError::Io`] escapes [`read_image`](super::read_image); the
/// other variants describe why a readable file is not a valid image, which
/// the decoder reports by returning an empty grid.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be opened or read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A header field lies past the end of the data.
    #[error("Header field '{0}' is past the end of the file")]
    MissingField(&'static str),

    /// The declared file size disagrees with the layout computed from the header.
    #[error("Declared file size {declared} does not match computed size {computed}")]
    SizeMismatch { declared: u64, computed: u64 },

    /// Only 24-bit and 32-bit uncompressed pixel data is supported.
    #[error("Unsupported bit depth: {0} bits per pixel")]
    UnsupportedBitDepth(u16),

    /// The pixel array extends past the end of the data.
    #[error("Truncated pixel data: need {needed} bytes, got {actual}")]
    Truncated { needed: u64, actual: u64 },

    /// Header dimensions overflow the size computation.
    #[error("Dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },
}

/// The header fields the decoder reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapHeader {
    /// Total file size in bytes (offset 2).
    pub file_size: u32,
    /// Start of the pixel array (offset 10).
    pub pixel_offset: u32,
    /// Width in pixels (offset 18).
    pub width: u32,
    /// Height in pixels (offset 22).
    pub height: u32,
    /// Bits per pixel (offset 28).
    pub bits_per_pixel: u16,
}

impl BitmapHeader {
    /// Bytes each pixel occupies in the pixel array.
    #[inline]
    pub fn bytes_per_pixel(&self) -> u64 {
        (self.bits_per_pixel / 8) as u64
    }

    /// Unpadded scanline length in bytes.
    #[inline]
    pub fn scanline_bytes(&self) -> u64 {
        self.width as u64 * self.bytes_per_pixel()
    }

    /// Zero bytes appended to each scanline to reach a multiple of 4.
    #[inline]
    pub fn padding(&self) -> u64 {
        row_padding(self.scanline_bytes())
    }

    /// Size of the pixel array including padding, or `None` on overflow.
    pub fn pixel_array_bytes(&self) -> Option<u64> {
        (self.scanline_bytes() + self.padding()).checked_mul(self.height as u64)
    }

    /// File size implied by the header layout, or `None` on overflow.
    pub fn computed_file_size(&self) -> Option<u64> {
        self.pixel_array_bytes()?
            .checked_add(self.pixel_offset as u64)
    }
}

/// Padding needed to round `scanline_bytes` up to a multiple of 4.
#[inline]
pub fn row_padding(scanline_bytes: u64) -> u64 {
    (4 - scanline_bytes % 4) % 4
}

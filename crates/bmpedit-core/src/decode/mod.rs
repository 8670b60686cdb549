//! Bitmap decoding pipeline.
//!
//! This module provides functionality for:
//! - Reading little-endian header fields at fixed offsets
//! - Validating the declared file size against the computed layout
//! - Rebuilding a top-down RGB [`PixelGrid`](crate::grid::PixelGrid) from
//!   bottom-up, BGR-ordered, padded scanlines
//!
//! # Invalid Images
//!
//! A file whose header does not describe a consistent 24- or 32-bit pixel
//! array decodes to an empty grid. Callers treat an empty grid as "operation
//! cannot proceed". A file that cannot be read at all is reported separately
//! as [`DecodeError::Io`].
//!
//! # Examples
//!
//! ```ignore
//! use bmpedit_core::decode::read_image;
//!
//! let grid = read_image("sample.bmp")?;
//! if grid.is_empty() {
//!     println!("not a valid image");
//! }
//! ```

mod bmp;
mod fields;
mod types;

pub use bmp::{decode_bmp, parse_header, read_image, validate_bmp};
pub use fields::read_uint;
pub use types::{row_padding, BitmapHeader, DecodeError};

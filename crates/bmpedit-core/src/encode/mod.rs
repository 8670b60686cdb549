//! Bitmap encoding pipeline.
//!
//! This module provides functionality for:
//! - Encoding a [`PixelGrid`](crate::grid::PixelGrid) to 24-bit BMP bytes
//! - Writing the encoded bytes to a file
//!
//! # Examples
//!
//! ```ignore
//! use bmpedit_core::encode::write_image;
//!
//! write_image("out.bmp", &grid)?;
//! ```

mod bmp;

pub use bmp::{encode_bmp, encoded_size, save_image, write_image, EncodeError};

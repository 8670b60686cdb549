//! BMP Edit Core - 24-bit bitmap codec and pixel transforms
//!
//! This crate decodes uncompressed BMP files into a [`PixelGrid`], applies
//! one of ten pure transforms to it, and encodes the result back to a
//! 24-bit BMP.
//!
//! Data flow: bytes → [`decode`] → [`PixelGrid`] → transform → [`encode`] → bytes
//!
//! # Example
//!
//! ```ignore
//! use bmpedit_core::{Operation, Session};
//!
//! let session = Session::new("photo.bmp");
//! session.run(&Operation::Darken { factor: 0.5 }, "dark.bmp")?;
//! ```

pub mod adjustments;
pub mod decode;
pub mod encode;
pub mod grid;
pub mod pipeline;
pub mod tone;
pub mod transform;

pub use adjustments::{apply_clarendon, apply_darken, apply_lighten, apply_vignette};
pub use decode::{decode_bmp, read_image, validate_bmp, DecodeError};
pub use encode::{encode_bmp, save_image, write_image, EncodeError};
pub use grid::{Pixel, PixelGrid};
pub use pipeline::{Operation, PipelineError, Session};
pub use tone::{apply_grayscale, apply_high_contrast, apply_posterize};
pub use transform::{
    apply_enlarge, rotate_90_cw, rotate_by_degrees, rotate_quarter_turns, TransformError,
};

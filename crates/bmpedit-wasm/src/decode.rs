//! Bitmap decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_bmp`] - Decode BMP bytes into a pixel grid
//! - [`is_valid_bmp`] - Check whether bytes hold a decodable bitmap
//!
//! # Example
//!
//! ```typescript
//! import { decode_bmp, is_valid_bmp } from '@bmpedit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (is_valid_bmp(bytes)) {
//!   const image = decode_bmp(bytes);
//!   console.log(`Decoded ${image.width}x${image.height}`);
//! }
//! ```

use crate::types::JsPixelGrid;
use bmpedit_core::{decode, PixelGrid};
use wasm_bindgen::prelude::*;

/// Decode a 24- or 32-bit BMP from bytes.
///
/// # Errors
///
/// Returns an error naming the reason when the bytes are not a valid image:
/// inconsistent declared size, unsupported bit depth, truncated data, or a
/// bitmap with no pixels.
#[wasm_bindgen]
pub fn decode_bmp(bytes: &[u8]) -> Result<JsPixelGrid, JsValue> {
    decode_grid(bytes)
        .map(|grid| JsPixelGrid::from_grid(&grid))
        .map_err(|e| JsValue::from_str(&e))
}

pub(crate) fn decode_grid(bytes: &[u8]) -> Result<PixelGrid, String> {
    let grid = decode::decode_bmp(bytes);
    if !grid.is_empty() {
        return Ok(grid);
    }
    // Reparse to report why decoding failed
    Err(match decode::validate_bmp(bytes) {
        Err(e) => format!("Not a valid image: {e}"),
        Ok(header) => format!(
            "Not a valid image: {}x{} bitmap has no pixels",
            header.width, header.height
        ),
    })
}

/// Check whether `bytes` hold a bitmap the decoder accepts.
#[wasm_bindgen]
pub fn is_valid_bmp(bytes: &[u8]) -> bool {
    decode::validate_bmp(bytes).is_ok()
}

//! Bitmap encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_bmp } from '@bmpedit/wasm';
//!
//! const bmpBytes = encode_bmp(image);
//! await writable.write(new Blob([bmpBytes], { type: 'image/bmp' }));
//! ```

use crate::types::JsPixelGrid;
use bmpedit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a pixel grid as a 24-bit BMP.
///
/// # Errors
///
/// Returns an error if the image is empty or its pixel buffer does not match
/// its dimensions.
#[wasm_bindgen]
pub fn encode_bmp(image: &JsPixelGrid) -> Result<Vec<u8>, JsValue> {
    encode::encode_bmp(&image.to_grid()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for encode bindings.
///
/// `encode_bmp` returns `Result<T, JsValue>`, which only works on wasm32
/// targets; these exercise the same conversion through the core encoder.
#[cfg(test)]
mod tests {
    use super::*;
    use bmpedit_core::{Pixel, PixelGrid};

    #[test]
    fn test_encode_from_js_grid_creates_valid_bmp() {
        let img = JsPixelGrid::from_grid(&PixelGrid::filled(5, 3, Pixel::gray(40)));
        let bmp = encode::encode_bmp(&img.to_grid()).unwrap();
        assert_eq!(&bmp[0..2], b"BM");
        // 5 * 3 = 15 bytes + 1 padding, 3 rows
        assert_eq!(bmp.len(), 54 + 16 * 3);
    }

    #[test]
    fn test_encode_mismatched_buffer_fails() {
        let img = JsPixelGrid::new(5, 3, vec![0u8; 10]);
        assert!(encode::encode_bmp(&img.to_grid()).is_err());
    }
}

//! WASM-compatible wrapper types for image data.
//!
//! This module provides the JavaScript-facing image type and its conversion
//! to and from the core [`PixelGrid`].

use bmpedit_core::{Pixel, PixelGrid};
use wasm_bindgen::prelude::*;

/// A pixel grid wrapper for JavaScript.
///
/// Pixels are exposed as packed RGB bytes, top row first, 3 bytes per pixel.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsPixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a new JsPixelGrid from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Number of columns
    /// * `height` - Number of rows
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelGrid {
        JsPixelGrid {
            width,
            height,
            pixels,
        }
    }

    /// Number of columns
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the grid has no pixels, as returned for an invalid image.
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelGrid {
    /// Pack a core grid into RGB bytes.
    pub(crate) fn from_grid(grid: &PixelGrid) -> Self {
        let pixels = grid
            .pixels()
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue])
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            pixels,
        }
    }

    /// Unpack into a core grid.
    ///
    /// A buffer whose length is not `width * height * 3` converts to the
    /// empty grid, the same result an invalid bitmap decodes to.
    pub(crate) fn to_grid(&self) -> PixelGrid {
        if self.pixels.len() % 3 != 0 {
            return PixelGrid::empty();
        }
        let pixels = self
            .pixels
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        PixelGrid::from_pixels(self.width, self.height, pixels).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_grid_creation() {
        let img = JsPixelGrid::new(4, 2, vec![0u8; 4 * 2 * 3]);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.byte_length(), 24);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_from_grid_packs_rgb() {
        let grid = PixelGrid::from_rows(&[vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)]]).unwrap();
        let img = JsPixelGrid::from_grid(&grid);
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.pixels(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_to_grid_round_trip() {
        let grid = PixelGrid::from_fn(3, 2, |row, col| Pixel::new(row as u8, col as u8, 9));
        assert_eq!(JsPixelGrid::from_grid(&grid).to_grid(), grid);
    }

    #[test]
    fn test_to_grid_wrong_length_is_empty() {
        assert!(JsPixelGrid::new(2, 2, vec![0u8; 11]).to_grid().is_empty());
        assert!(JsPixelGrid::new(2, 2, vec![0u8; 9]).to_grid().is_empty());
    }

    #[test]
    fn test_empty_flag() {
        assert!(JsPixelGrid::from_grid(&PixelGrid::empty()).is_empty());
    }
}

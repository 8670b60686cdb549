//! Per-pixel adjustment WASM bindings.
//!
//! Thin wrappers over the core tonal adjustments and tone reductions. Each
//! takes an image and returns a new one of the same dimensions.

use crate::types::JsPixelGrid;
use bmpedit_core::{adjustments, tone};
use wasm_bindgen::prelude::*;

/// Darken pixels in proportion to their distance from the center.
#[wasm_bindgen]
pub fn apply_vignette(image: &JsPixelGrid) -> JsPixelGrid {
    JsPixelGrid::from_grid(&adjustments::apply_vignette(&image.to_grid()))
}

/// Push light pixels lighter and dark pixels darker by `factor`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const punchy = apply_clarendon(image, 0.5);
/// ```
#[wasm_bindgen]
pub fn apply_clarendon(image: &JsPixelGrid, factor: f64) -> JsPixelGrid {
    JsPixelGrid::from_grid(&adjustments::apply_clarendon(&image.to_grid(), factor))
}

/// Pull every channel toward white: `255 - (255 - c) * factor`.
#[wasm_bindgen]
pub fn apply_lighten(image: &JsPixelGrid, factor: f64) -> JsPixelGrid {
    JsPixelGrid::from_grid(&adjustments::apply_lighten(&image.to_grid(), factor))
}

/// Scale every channel toward black: `c * factor`.
#[wasm_bindgen]
pub fn apply_darken(image: &JsPixelGrid, factor: f64) -> JsPixelGrid {
    JsPixelGrid::from_grid(&adjustments::apply_darken(&image.to_grid(), factor))
}

#[wasm_bindgen]
pub fn apply_grayscale(image: &JsPixelGrid) -> JsPixelGrid {
    JsPixelGrid::from_grid(&tone::apply_grayscale(&image.to_grid()))
}

/// Reduce to pure black and white around an average of 127.
#[wasm_bindgen]
pub fn apply_high_contrast(image: &JsPixelGrid) -> JsPixelGrid {
    JsPixelGrid::from_grid(&tone::apply_high_contrast(&image.to_grid()))
}

/// Reduce to black, white, red, green and blue.
#[wasm_bindgen]
pub fn apply_posterize(image: &JsPixelGrid) -> JsPixelGrid {
    JsPixelGrid::from_grid(&tone::apply_posterize(&image.to_grid()))
}

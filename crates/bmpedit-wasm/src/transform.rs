//! WASM bindings for geometric transforms.
//!
//! This module provides JavaScript bindings for quarter-turn rotation and
//! nearest-neighbor enlargement.

use crate::types::JsPixelGrid;
use bmpedit_core::transform::{
    apply_enlarge as core_enlarge, rotate_90_cw as core_rotate_90,
    rotate_by_degrees as core_rotate_degrees, rotate_quarter_turns as core_rotate_turns,
};
use wasm_bindgen::prelude::*;

/// Rotate 90 degrees clockwise. Width and height are swapped.
#[wasm_bindgen]
pub fn rotate_90_cw(image: &JsPixelGrid) -> JsPixelGrid {
    JsPixelGrid::from_grid(&core_rotate_90(&image.to_grid()))
}

/// Rotate clockwise by `turns` quarter turns (any integer, reduced modulo 4).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const upsideDown = rotate_quarter_turns(image, 2);
/// const left = rotate_quarter_turns(image, -1);
/// ```
#[wasm_bindgen]
pub fn rotate_quarter_turns(image: &JsPixelGrid, turns: i32) -> JsPixelGrid {
    JsPixelGrid::from_grid(&core_rotate_turns(&image.to_grid(), i64::from(turns)))
}

/// Rotate clockwise by `degrees`.
///
/// # Errors
///
/// Returns an error unless `degrees` is a multiple of 90.
#[wasm_bindgen]
pub fn rotate_by_degrees(image: &JsPixelGrid, degrees: i32) -> Result<JsPixelGrid, JsValue> {
    core_rotate_degrees(&image.to_grid(), i64::from(degrees))
        .map(|grid| JsPixelGrid::from_grid(&grid))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Enlarge by integer factors: columns by `x_scale`, rows by `y_scale`.
///
/// # Errors
///
/// Returns an error if either scale is zero or the result is too large.
#[wasm_bindgen]
pub fn apply_enlarge(
    image: &JsPixelGrid,
    x_scale: u32,
    y_scale: u32,
) -> Result<JsPixelGrid, JsValue> {
    core_enlarge(&image.to_grid(), x_scale, y_scale)
        .map(|grid| JsPixelGrid::from_grid(&grid))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

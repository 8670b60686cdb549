//! Operation dispatch WASM bindings.
//!
//! Lets JavaScript describe an operation as a plain object and apply it:
//!
//! ```typescript
//! const dark = apply_operation(image, { op: "darken", factor: 0.5 });
//! const big = apply_operation(image, { op: "enlarge", x_scale: 2, y_scale: 2 });
//! ```

use crate::types::JsPixelGrid;
use bmpedit_core::Operation;
use wasm_bindgen::prelude::*;

/// Every operation in menu order, with default parameters.
const MENU: [Operation; 10] = [
    Operation::Vignette,
    Operation::Clarendon { factor: 0.5 },
    Operation::Grayscale,
    Operation::Rotate90,
    Operation::RotateN { turns: 1 },
    Operation::Enlarge {
        x_scale: 2,
        y_scale: 2,
    },
    Operation::HighContrast,
    Operation::Lighten { factor: 0.5 },
    Operation::Darken { factor: 0.5 },
    Operation::Posterize,
];

/// Apply an operation described by a tagged object such as
/// `{ op: "lighten", factor: 0.5 }`.
///
/// # Errors
///
/// Returns an error if the object does not describe a known operation or its
/// parameters cannot be applied.
#[wasm_bindgen]
pub fn apply_operation(image: &JsPixelGrid, op: JsValue) -> Result<JsPixelGrid, JsValue> {
    let op: Operation = serde_wasm_bindgen::from_value(op)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {e}")))?;
    run_operation(image, &op).map_err(|e| JsValue::from_str(&e))
}

/// Menu names of every operation, in menu order.
#[wasm_bindgen]
pub fn operation_names() -> js_sys::Array {
    MENU.iter().map(|op| JsValue::from_str(op.name())).collect()
}

pub(crate) fn run_operation(image: &JsPixelGrid, op: &Operation) -> Result<JsPixelGrid, String> {
    op.apply(&image.to_grid())
        .map(|grid| JsPixelGrid::from_grid(&grid))
        .map_err(|e| e.to_string())
}

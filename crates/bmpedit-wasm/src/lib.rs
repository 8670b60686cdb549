//! BMP Edit WASM - WebAssembly bindings for bmpedit
//!
//! This crate provides WASM bindings to expose the bmpedit-core codec and
//! transforms to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for pixel grids
//! - `decode` - BMP decoding bindings
//! - `encode` - BMP encoding bindings
//! - `adjustments` - Vignette, Clarendon, lighten, darken and tone reductions
//! - `transform` - Rotation and enlargement
//! - `pipeline` - Tagged-object operation dispatch
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_bmp, apply_operation, encode_bmp } from '@bmpedit/wasm';
//!
//! await init();
//!
//! const image = decode_bmp(new Uint8Array(await file.arrayBuffer()));
//! const gray = apply_operation(image, { op: "grayscale" });
//! const bytes = encode_bmp(gray);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod encode;
mod pipeline;
mod transform;
mod types;

// Re-export public types
pub use adjustments::{
    apply_clarendon, apply_darken, apply_grayscale, apply_high_contrast, apply_lighten,
    apply_posterize, apply_vignette,
};
pub use decode::{decode_bmp, is_valid_bmp};
pub use encode::encode_bmp;
pub use pipeline::{apply_operation, operation_names};
pub use transform::{apply_enlarge, rotate_90_cw, rotate_by_degrees, rotate_quarter_turns};
pub use types::JsPixelGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

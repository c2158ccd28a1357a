//! PNG loading and saving bindings.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const grid = decode_png(new Uint8Array(await file.arrayBuffer()));
//! invert(grid);
//! const bytes = encode_png(grid);
//! await writable.write(new Blob([bytes], { type: 'image/png' }));
//! ```

use crate::types::JsPixelGrid;
use imager_core::png;
use wasm_bindgen::prelude::*;

/// Decode PNG file bytes into an editable grid.
///
/// # Errors
/// Returns an error if the bytes are not a valid PNG.
#[wasm_bindgen]
pub fn decode_png(bytes: &[u8]) -> Result<JsPixelGrid, JsValue> {
    png::decode_png(bytes)
        .map(JsPixelGrid::from_grid)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode the grid as PNG file bytes.
///
/// # Errors
/// Returns an error if encoding fails internally.
#[wasm_bindgen]
pub fn encode_png(grid: &JsPixelGrid) -> Result<Vec<u8>, JsValue> {
    png::encode_png(grid.grid()).map_err(|e| JsValue::from_str(&e.to_string()))
}

//! Imager WASM - WebAssembly bindings for Imager
//!
//! This crate provides WASM bindings to expose the imager-core operations
//! to a JavaScript/TypeScript editing UI.
//!
//! # Module Structure
//!
//! - `types` - `JsPixelGrid`, the editable image handle
//! - `operations` - Transforms, tonal and block filters
//! - `stego` - Hiding and recovering text
//! - `png` - Loading and saving PNG files
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_png, rotate_left, encode_message } from '@imager/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const grid = decode_png(new Uint8Array(await file.arrayBuffer()));
//! rotate_left(grid);
//! encode_message(grid, 'hello');
//! console.log(`Edited ${grid.width}x${grid.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod operations;
mod png;
mod stego;
mod types;

// Re-export public types
pub use operations::{
    apply_operation, invert, jail, monochromify, pixellate, reflect_horizontal, reflect_vertical,
    rotate_left, rotate_right, transpose, vignette,
};
pub use png::{decode_png, encode_png};
pub use stego::{decode_message, encode_message, max_message_length};
pub use types::JsPixelGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

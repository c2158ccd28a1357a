//! WASM bindings for grid operations.
//!
//! Every function edits the grid in place. Pass a copy (`grid.clone()`) when
//! the previous step must be kept for undo.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! rotate_right(grid);
//! pixellate(grid, 8);
//! apply_operation(grid, { type: 'monochromify', sepia: true });
//! ```

use crate::types::JsPixelGrid;
use imager_core::{block, tone, transform, Operation, TransformError};
use wasm_bindgen::prelude::*;

fn to_js_error(e: TransformError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Invert every channel.
#[wasm_bindgen]
pub fn invert(grid: &mut JsPixelGrid) {
    tone::invert(grid.grid_mut());
}

/// Swap rows and columns.
#[wasm_bindgen]
pub fn transpose(grid: &mut JsPixelGrid) {
    transform::transpose(grid.grid_mut());
}

/// Mirror left-to-right.
#[wasm_bindgen]
pub fn reflect_horizontal(grid: &mut JsPixelGrid) {
    transform::reflect_horizontal(grid.grid_mut());
}

/// Mirror top-to-bottom.
#[wasm_bindgen]
pub fn reflect_vertical(grid: &mut JsPixelGrid) {
    transform::reflect_vertical(grid.grid_mut());
}

/// Rotate 90 degrees counter-clockwise.
#[wasm_bindgen]
pub fn rotate_left(grid: &mut JsPixelGrid) {
    transform::rotate_left(grid.grid_mut());
}

/// Rotate 90 degrees clockwise.
#[wasm_bindgen]
pub fn rotate_right(grid: &mut JsPixelGrid) {
    transform::rotate_right(grid.grid_mut());
}

/// Convert to greyscale, or to sepia when `sepia` is true.
#[wasm_bindgen]
pub fn monochromify(grid: &mut JsPixelGrid, sepia: bool) {
    tone::monochromify(grid.grid_mut(), sepia);
}

/// Darken toward the corners.
#[wasm_bindgen]
pub fn vignette(grid: &mut JsPixelGrid) {
    tone::vignette(grid.grid_mut());
}

/// Replace each `step` x `step` block with its average color.
///
/// # Errors
/// Returns an error if `step` is zero.
#[wasm_bindgen]
pub fn pixellate(grid: &mut JsPixelGrid, step: usize) -> Result<(), JsValue> {
    block::pixellate(grid.grid_mut(), step).map_err(to_js_error)
}

/// Draw red jail bars over the image.
///
/// # Errors
/// Returns an error if the image is narrower than 4 or shorter than 3 pixels.
#[wasm_bindgen]
pub fn jail(grid: &mut JsPixelGrid) -> Result<(), JsValue> {
    block::jail(grid.grid_mut()).map_err(to_js_error)
}

/// Apply an operation described as a plain object.
///
/// # Arguments
/// * `op` - e.g. `{ type: 'pixellate', step: 8 }` or
///   `{ type: 'jail', color: { red: 0, green: 0, blue: 255 } }`
///
/// # Errors
/// Returns an error if `op` is not a known operation or the operation's
/// preconditions fail. The grid is untouched in both cases.
#[wasm_bindgen]
pub fn apply_operation(grid: &mut JsPixelGrid, op: JsValue) -> Result<(), JsValue> {
    let op: Operation = serde_wasm_bindgen::from_value(op)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))?;
    op.apply(grid.grid_mut()).map_err(to_js_error)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn operation(kind: &str) -> js_sys::Object {
        let op = js_sys::Object::new();
        js_sys::Reflect::set(&op, &"type".into(), &kind.into()).unwrap();
        op
    }

    #[wasm_bindgen_test]
    fn test_apply_operation_from_object() {
        let mut img = JsPixelGrid::new(4, 2, vec![10u8; 24]).unwrap();
        let op = operation("rotateRight");
        apply_operation(&mut img, op.into()).unwrap();
        assert_eq!((img.width(), img.height()), (2, 4));
    }

    #[wasm_bindgen_test]
    fn test_apply_operation_with_parameters() {
        let mut img = JsPixelGrid::new(4, 4, vec![10u8; 48]).unwrap();
        let op = operation("pixellate");
        js_sys::Reflect::set(&op, &"step".into(), &JsValue::from(2)).unwrap();
        assert!(apply_operation(&mut img, op.into()).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_apply_operation_rejects_unknown() {
        let mut img = JsPixelGrid::new(4, 4, vec![10u8; 48]).unwrap();
        assert!(apply_operation(&mut img, operation("blur").into()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_precondition_errors() {
        let mut img = JsPixelGrid::new(2, 2, vec![10u8; 12]).unwrap();
        assert!(pixellate(&mut img, 0).is_err());
        assert!(jail(&mut img).is_err());
    }
}

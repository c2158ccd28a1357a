//! WASM-compatible wrapper types for image data.
//!
//! This module provides a JavaScript-friendly handle around the core
//! `PixelGrid`, converting between packed RGB bytes and the grid.

use imager_core::grid::{GridError, PixelGrid, Rgb};
use wasm_bindgen::prelude::*;

/// An editable image held in WASM memory.
///
/// Edits mutate the grid in place, so one `JsPixelGrid` plays the role of the
/// current step of the caller's edit history.
///
/// # Memory Management
///
/// Pixel data stays in WASM memory. `pixels()` copies it out as a
/// `Uint8Array`; call it once per repaint, not once per edit.
#[wasm_bindgen]
pub struct JsPixelGrid {
    inner: PixelGrid,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a grid from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Returns an error if a dimension is zero or the buffer length is not
    /// `width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelGrid, JsValue> {
        Self::from_raw(width, height, &pixels).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width() as u32
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height() as u32
    }

    /// Get the number of bytes `pixels()` returns (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.len() * 3
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.to_raw_rgb()
    }

    /// Get one pixel as `[red, green, blue]`.
    ///
    /// # Errors
    /// Returns an error if `(row, col)` is outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> Result<Vec<u8>, JsValue> {
        self.inner
            .get_checked(row, col)
            .map(|p| p.channels().to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set one pixel.
    ///
    /// # Errors
    /// Returns an error if `(row, col)` is outside the grid.
    pub fn set_pixel(
        &mut self,
        row: usize,
        col: usize,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), JsValue> {
        self.inner
            .set_checked(row, col, Rgb::new(red, green, blue))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create an independent copy, e.g. to push a new history step.
    #[wasm_bindgen(js_name = clone)]
    pub fn duplicate(&self) -> JsPixelGrid {
        JsPixelGrid::from_grid(self.inner.clone())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelGrid {
    /// Build from packed RGB bytes without going through `JsValue`.
    pub(crate) fn from_raw(width: u32, height: u32, pixels: &[u8]) -> Result<Self, GridError> {
        PixelGrid::from_raw_rgb(width as usize, height as usize, pixels).map(Self::from_grid)
    }

    pub(crate) fn from_grid(inner: PixelGrid) -> Self {
        Self { inner }
    }

    pub(crate) fn grid(&self) -> &PixelGrid {
        &self.inner
    }

    pub(crate) fn grid_mut(&mut self) -> &mut PixelGrid {
        &mut self.inner
    }
}

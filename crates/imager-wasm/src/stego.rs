//! WASM bindings for hiding text in an image.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! encode_message(grid, 'meet at noon');
//! const text = decode_message(grid); // 'meet at noon', or undefined
//! ```
//!
//! Save the result with `encode_png`; lossy formats destroy the message.

use crate::types::JsPixelGrid;
use imager_core::stego;
use wasm_bindgen::prelude::*;

/// Hide `text` in the image, replacing any earlier message.
///
/// # Errors
/// Returns an error if the message does not fit the image or contains a
/// character above U+00FF. The image is untouched in that case.
#[wasm_bindgen]
pub fn encode_message(grid: &mut JsPixelGrid, text: &str) -> Result<(), JsValue> {
    stego::encode(grid.grid_mut(), text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Text hidden in the image, or `undefined` if there is none.
#[wasm_bindgen]
pub fn decode_message(grid: &JsPixelGrid) -> Option<String> {
    stego::decode(grid.grid())
}

/// Longest message, in characters, the image can hold.
///
/// Returns `undefined` for images with fewer than 5 pixels.
#[wasm_bindgen]
pub fn max_message_length(grid: &JsPixelGrid) -> Option<usize> {
    stego::max_message_len(grid.grid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsPixelGrid {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i * 7 % 256) as u8)
            .collect();
        JsPixelGrid::from_raw(width, height, &pixels).unwrap()
    }

    #[test]
    fn test_encode_then_decode() {
        let mut img = test_image(8, 8);
        assert!(encode_message(&mut img, "hello").is_ok());
        assert_eq!(decode_message(&img).as_deref(), Some("hello"));
    }

    #[test]
    fn test_decode_without_message() {
        let img = JsPixelGrid::from_raw(4, 4, &[100u8; 48]).unwrap();
        assert_eq!(decode_message(&img), None);
    }

    #[test]
    fn test_max_message_length() {
        assert_eq!(max_message_length(&test_image(2, 2)), None);
        assert_eq!(max_message_length(&test_image(4, 4)), Some(10));
    }
}

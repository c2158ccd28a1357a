//! Encoding and decoding whole messages against a grid.

use super::channel::{decode_pixel, encode_pixel};
use super::marker::{digit_count, FrameError, Marker};
use super::{StegoError, MAX_MESSAGE_LEN};
use crate::grid::PixelGrid;
use log::{debug, warn};

/// Hide `text` in the grid, starting at flat pixel 0.
///
/// One pixel holds one character, so the frame needs
/// `4 + digits(len) + len` pixels. Characters must be in the Latin-1 range
/// (code points 0-255).
///
/// # Errors
/// - [`StegoError::MessageTooLong`] if `text` has more than 999999 characters
/// - [`StegoError::InsufficientCapacity`] if the frame needs more pixels than the grid has
/// - [`StegoError::UnsupportedCharacter`] for a character above U+00FF
///
/// The grid is left untouched on error.
pub fn encode(grid: &mut PixelGrid, text: &str) -> Result<(), StegoError> {
    let len = text.chars().count();
    if len > MAX_MESSAGE_LEN {
        warn!("refusing to hide {} characters, limit is {}", len, MAX_MESSAGE_LEN);
        return Err(StegoError::MessageTooLong { len });
    }

    let marker = Marker::new(len);
    let required = marker.frame_len();
    if required > grid.len() {
        warn!(
            "message needs {} pixels, grid {}x{} has {}",
            required,
            grid.width(),
            grid.height(),
            grid.len()
        );
        return Err(StegoError::InsufficientCapacity {
            required,
            available: grid.len(),
        });
    }

    let mut frame = marker.to_codes();
    frame.reserve(len);
    for (index, ch) in text.chars().enumerate() {
        let code = u8::try_from(u32::from(ch))
            .map_err(|_| StegoError::UnsupportedCharacter { ch, index })?;
        frame.push(code);
    }

    debug!("hiding {} characters in {} pixels", len, frame.len());
    for (index, &code) in frame.iter().enumerate() {
        let pixel = grid.get_flat(index);
        grid.set_flat(index, encode_pixel(pixel, code));
    }
    Ok(())
}

/// Recover the text hidden in the grid, if any.
///
/// Returns `None` when the grid's leading channel-digit numbers do not form a
/// valid marker, or when the announced payload runs past the last pixel.
pub fn decode(grid: &PixelGrid) -> Option<String> {
    let codes: Vec<u16> = grid.pixels().iter().map(|&p| decode_pixel(p)).collect();

    match read_frame(&codes) {
        Ok(text) => {
            debug!("found hidden message of {} characters", text.chars().count());
            Some(text)
        }
        Err(e) => {
            debug!("no hidden message: {}", e);
            None
        }
    }
}

fn read_frame(codes: &[u16]) -> Result<String, FrameError> {
    let marker = Marker::parse(codes)?;
    let available = codes.len() - marker.header_len;
    if marker.payload_len > available {
        return Err(FrameError::Truncated {
            needed: marker.payload_len,
            available,
        });
    }

    let payload = &codes[marker.header_len..marker.header_len + marker.payload_len];
    // Every code is below 1000, so each maps to a Unicode scalar.
    Ok(payload
        .iter()
        .filter_map(|&c| char::from_u32(u32::from(c)))
        .collect())
}

/// Longest message, in characters, that fits in the grid.
///
/// Returns `None` if not even an empty message fits (fewer than 5 pixels).
pub fn max_message_len(grid: &PixelGrid) -> Option<usize> {
    let pixels = grid.len();
    let mut len = pixels.checked_sub(5)?.min(MAX_MESSAGE_LEN);
    while 4 + digit_count(len) + len > pixels {
        len -= 1;
    }
    Some(len)
}

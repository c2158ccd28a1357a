//! Per-pixel digit encoding.
//!
//! Worked example, code 165 into pixel `(199, 254, 247)`:
//!
//! ```text
//! red    199 -> 190 + 1 = 191
//! green  254 -> 250 + 6 = 256 > 255 -> 246
//! blue   247 -> 240 + 5 = 245
//! ```
//!
//! The overflow fallback changes the tens digit but never the ones digit, so
//! decoding does not need to know it happened.

use crate::grid::Rgb;

/// Replace the ones digit of `channel` with `digit`.
///
/// Values that would exceed 255 are folded back by 10.
///
/// # Panics
/// If `digit > 9`.
#[inline]
pub fn embed_digit(channel: u8, digit: u8) -> u8 {
    assert!(digit < 10, "channel digit must be 0-9, got {digit}");
    let value = (channel / 10) as u16 * 10 + digit as u16;
    if value > 255 {
        (value - 10) as u8
    } else {
        value as u8
    }
}

/// Hide a character code in the ones digits of a pixel's channels.
#[inline]
pub fn encode_pixel(pixel: Rgb, code: u8) -> Rgb {
    Rgb::new(
        embed_digit(pixel.red, code / 100),
        embed_digit(pixel.green, (code / 10) % 10),
        embed_digit(pixel.blue, code % 10),
    )
}

/// Read the channel-digit number stored in a pixel.
///
/// The result is in `0..=999`; values above 255 only come from pixels that
/// were never encoded.
#[inline]
pub fn decode_pixel(pixel: Rgb) -> u16 {
    (pixel.red % 10) as u16 * 100 + (pixel.green % 10) as u16 * 10 + (pixel.blue % 10) as u16
}

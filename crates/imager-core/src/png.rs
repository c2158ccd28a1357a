//! Lossless PNG loading and saving.
//!
//! Hidden messages live in the ones digit of every channel, so a grid must
//! only ever be stored in a lossless format. PNG is the one format the editor
//! reads and writes. Alpha is dropped on load.

use crate::grid::{GridError, PixelGrid};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader};
use log::debug;
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur while loading or saving a PNG.
#[derive(Debug, Error)]
pub enum PngError {
    /// Bytes are not a readable PNG
    #[error("PNG decoding failed: {0}")]
    DecodingFailed(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// Grid is larger than a PNG can describe
    #[error("Image too large for PNG: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    /// Decoded pixels do not form a valid grid
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Decode PNG bytes into a grid.
///
/// # Errors
///
/// Returns `PngError::DecodingFailed` if the bytes are not a valid PNG and
/// `PngError::Grid` for a zero-sized image.
pub fn decode_png(bytes: &[u8]) -> Result<PixelGrid, PngError> {
    let img = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png)
        .decode()
        .map_err(|e| PngError::DecodingFailed(e.to_string()))?;

    let rgb = img.into_rgb8();
    debug!("decoded PNG {}x{}", rgb.width(), rgb.height());
    Ok(PixelGrid::from_rgb_image(&rgb)?)
}

/// Encode a grid as PNG bytes.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, PngError> {
    let too_large = || PngError::TooLarge {
        width: grid.width(),
        height: grid.height(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| too_large())?;
    let height = u32::try_from(grid.height()).map_err(|_| too_large())?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&grid.to_raw_rgb(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| PngError::EncodingFailed(e.to_string()))?;

    debug!("encoded PNG {}x{}", width, height);
    Ok(buffer.into_inner())
}

//! Per-pixel tonal remapping.
//!
//! ## Operations
//! - **Invert**: each channel becomes its complement `255 - c`
//! - **Monochromify**: greyscale or sepia tone from a weighted brightness
//! - **Vignette**: darken pixels by their distance from the grid center
//!
//! Each output pixel depends only on its own input, so all three run in a
//! single pass without a snapshot.

use crate::grid::{PixelGrid, Rgb};
use log::debug;

/// Brightness weight for the red channel.
pub const BRIGHTNESS_R: f64 = 0.3;
/// Brightness weight for the green channel.
pub const BRIGHTNESS_G: f64 = 0.6;
/// Brightness weight for the blue channel.
pub const BRIGHTNESS_B: f64 = 0.1;

/// Sepia scale applied to brightness for the green channel.
const SEPIA_GREEN: f64 = 0.6;
/// Sepia scale applied to brightness for the blue channel.
const SEPIA_BLUE: f64 = 0.4;

/// Replace every pixel with its color complement.
pub fn invert(grid: &mut PixelGrid) {
    debug!("invert {} pixels", grid.len());
    for p in grid.pixels_mut() {
        *p = Rgb::new(255 - p.red, 255 - p.green, 255 - p.blue);
    }
}

/// Overall brightness of a pixel.
///
/// The weighted channels are summed as reals and truncated once, so
/// `brightness(Rgb::WHITE) == 255`.
#[inline]
pub fn brightness(p: Rgb) -> u8 {
    let sum = p.red as f64 * BRIGHTNESS_R
        + p.green as f64 * BRIGHTNESS_G
        + p.blue as f64 * BRIGHTNESS_B;
    sum as u8
}

/// Convert the grid to monochrome.
///
/// With `sepia == false` all three channels become the pixel's brightness.
/// With `sepia == true` red keeps the brightness while green and blue are
/// scaled to 60% and 40% of it.
pub fn monochromify(grid: &mut PixelGrid, sepia: bool) {
    debug!("monochromify {} pixels (sepia: {})", grid.len(), sepia);
    for p in grid.pixels_mut() {
        let b = brightness(*p);
        *p = if sepia {
            Rgb::new(b, (b as f64 * SEPIA_GREEN) as u8, (b as f64 * SEPIA_BLUE) as u8)
        } else {
            Rgb::new(b, b, b)
        };
    }
}

/// Darkening factor at `(row, col)` for a `width x height` grid.
///
/// Formula: `1 - d² / hfd²` where `d` is the distance to the grid center and
/// `hfd` the half diagonal. The result is clamped to `[0, 1]`.
#[inline]
pub fn vignette_factor(row: usize, col: usize, width: usize, height: usize) -> f64 {
    let (w, h) = (width as f64, height as f64);
    let dx = col as f64 - w / 2.0;
    let dy = row as f64 - h / 2.0;
    let half_diag2 = (w * w + h * h) / 4.0;
    (1.0 - (dx * dx + dy * dy) / half_diag2).clamp(0.0, 1.0)
}

/// Simulate lens vignetting by darkening toward the corners.
pub fn vignette(grid: &mut PixelGrid) {
    let (width, height) = (grid.width(), grid.height());
    debug!("vignette {}x{}", width, height);
    for row in 0..height {
        for col in 0..width {
            let f = vignette_factor(row, col, width, height);
            let p = grid.get(row, col);
            grid.set(
                row,
                col,
                Rgb::new(
                    (p.red as f64 * f) as u8,
                    (p.green as f64 * f) as u8,
                    (p.blue as f64 * f) as u8,
                ),
            );
        }
    }
}

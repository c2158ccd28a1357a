//! The in-memory pixel grid every operation edits.
//!
//! A [`PixelGrid`] owns a contiguous, row-major buffer of [`Rgb`] triples.
//! Pixels are addressable both as `(row, col)` and as a flat index
//! `row * width + col`; the two views always agree.
//!
//! # Invariant
//!
//! `pixels.len() == width * height` holds after every public call. Operations
//! that change the shape ([`PixelGrid::resize`], [`PixelGrid::set_width`])
//! keep the buffer in step with the new dimensions before returning.
//!
//! # Snapshots
//!
//! Geometric transforms read from a [`GridSnapshot`] taken before the live grid
//! is reshaped. A snapshot is an owned, read-only copy, so reads never observe
//! writes made to the grid it was taken from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from constructing or addressing a [`PixelGrid`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel data length doesn't match the dimensions.
    #[error("Invalid pixel data: expected {expected} values, got {actual}")]
    PixelDataMismatch { expected: usize, actual: usize },

    /// A checked accessor was given a position outside the grid.
    #[error("Pixel ({row}, {col}) is outside a {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// `width * height` pixels (or their bytes) cannot be addressed.
    #[error("Image too large: {width}x{height} pixels overflow the address space")]
    TooLarge { width: usize, height: usize },

    /// A new width does not evenly divide the current pixel count.
    #[error("Width {width} does not divide pixel count {len}")]
    IndivisibleWidth { width: usize, len: usize },
}

/// An RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels as `[red, green, blue]`.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.channels()
    }
}

/// A mutable 2-D grid of RGB pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Create a grid filled with a single color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, GridError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Create a black grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create a grid from row-major pixels.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, GridError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(GridError::PixelDataMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from packed RGB bytes (3 bytes per pixel, row-major order).
    pub fn from_raw_rgb(width: usize, height: usize, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = pixel_count(width, height)?
            .checked_mul(3)
            .ok_or(GridError::TooLarge { width, height })?;
        if bytes.len() != expected {
            return Err(GridError::PixelDataMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pack the grid back into RGB bytes.
    pub fn to_raw_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(&p.channels());
        }
        out
    }

    /// Create a grid from an `image::RgbImage`.
    pub fn from_rgb_image(img: &image::RgbImage) -> Result<Self, GridError> {
        let (width, height) = img.dimensions();
        Self::from_raw_rgb(width as usize, height as usize, img.as_raw())
    }

    /// Convert to an `image::RgbImage` for encoding by an outer layer.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let width = u32::try_from(self.width).ok()?;
        let height = u32::try_from(self.height).ok()?;
        image::RgbImage::from_raw(width, height, self.to_raw_rgb())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: every constructor rejects zero-sized grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    /// Get the pixel at `(row, col)`.
    ///
    /// # Panics
    /// If the position is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Rgb {
        self.pixels[self.index(row, col)]
    }

    /// Set the pixel at `(row, col)`.
    ///
    /// # Panics
    /// If the position is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, color: Rgb) {
        let idx = self.index(row, col);
        self.pixels[idx] = color;
    }

    pub fn get_checked(&self, row: usize, col: usize) -> Result<Rgb, GridError> {
        if row < self.height && col < self.width {
            Ok(self.pixels[row * self.width + col])
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    pub fn set_checked(&mut self, row: usize, col: usize, color: Rgb) -> Result<(), GridError> {
        if row < self.height && col < self.width {
            self.pixels[row * self.width + col] = color;
            Ok(())
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    /// Get the pixel at a flat, row-major index.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[inline]
    pub fn get_flat(&self, index: usize) -> Rgb {
        self.pixels[index]
    }

    /// Set the pixel at a flat, row-major index.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[inline]
    pub fn set_flat(&mut self, index: usize, color: Rgb) {
        self.pixels[index] = color;
    }

    /// Swap two pixels given as `(row, col)` pairs.
    pub fn swap_pixels(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.pixels.swap(ia, ib);
    }

    /// Reshape the grid to `width x height`.
    ///
    /// Existing pixels keep their flat positions; the buffer is truncated or
    /// extended with black so the length invariant holds.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        let len = pixel_count(width, height)?;
        self.pixels.resize(len, Rgb::BLACK);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Change the width, deriving the height from the unchanged pixel count.
    pub fn set_width(&mut self, width: usize) -> Result<(), GridError> {
        let len = self.pixels.len();
        if width == 0 || len % width != 0 {
            return Err(GridError::IndivisibleWidth { width, len });
        }
        self.width = width;
        self.height = len / width;
        Ok(())
    }

    /// Swap width and height. The pixel count is unchanged.
    pub(crate) fn swap_dimensions(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Take an immutable copy of the current pixels.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone().into_boxed_slice(),
        }
    }

    /// Mutable iteration over every pixel in flat order.
    pub(crate) fn pixels_mut(&mut self) -> std::slice::IterMut<'_, Rgb> {
        self.pixels.iter_mut()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}

/// Read-only copy of a grid taken before an in-place transform.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    width: usize,
    height: usize,
    pixels: Box<[Rgb]>,
}

impl GridSnapshot {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the pixel at `(row, col)` of the snapshotted grid.
    ///
    /// # Panics
    /// If the position is outside the snapshot.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Rgb {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} snapshot",
            self.width,
            self.height
        );
        self.pixels[row * self.width + col]
    }
}

/// Validated `width * height`.
fn pixel_count(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

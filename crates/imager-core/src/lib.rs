//! Imager Core - pixel-grid editing library
//!
//! This crate provides the image processing operations behind Imager's
//! buttons: geometric transforms, tonal filters, block filters and a
//! steganographic text channel, all working on one in-memory [`PixelGrid`].
//!
//! # Module Structure
//!
//! - `grid` - The pixel grid and its snapshots
//! - `transform` - Transpose, quarter-turn rotations and reflections
//! - `tone` - Invert, greyscale/sepia and vignette
//! - `block` - Pixellation and jail bars
//! - `stego` - Hiding and recovering text in channel digits
//! - `operation` - Serializable catalog of the edits above
//! - `png` - Lossless loading and saving
//! - `editor` - Actions against the current grid of an edit history
//!
//! Everything is synchronous and single-threaded. Each call assumes exclusive
//! access to the grid it edits. The only I/O is PNG bytes in memory.

pub mod block;
pub mod editor;
pub mod grid;
pub mod operation;
pub mod png;
pub mod stego;
pub mod tone;
pub mod transform;

pub use block::{jail, pixellate, JailStyle, TransformError};
pub use editor::{EditHistory, Editor};
pub use grid::{GridError, GridSnapshot, PixelGrid, Rgb};
pub use operation::Operation;
pub use png::{decode_png, encode_png, PngError};
pub use stego::StegoError;

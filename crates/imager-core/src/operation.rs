//! Serializable catalog of grid operations.
//!
//! An [`Operation`] names one edit together with its parameters, so an outer
//! layer can describe a button press as data and apply it later.
//!
//! ```text
//! { "type": "pixellate", "step": 8 }
//! { "type": "monochromify", "sepia": true }
//! { "type": "jail" }
//! { "type": "jail", "color": { "red": 0, "green": 0, "blue": 255 } }
//! ```

use crate::block::{self, JailStyle, TransformError};
use crate::grid::PixelGrid;
use crate::{tone, transform};
use serde::{Deserialize, Serialize};

/// One edit from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Operation {
    Invert,
    Transpose,
    ReflectHorizontal,
    ReflectVertical,
    RotateLeft,
    RotateRight,
    Monochromify {
        #[serde(default)]
        sepia: bool,
    },
    Vignette,
    Pixellate {
        step: usize,
    },
    Jail(JailStyle),
}

impl Operation {
    /// Apply the operation to `grid` in place.
    ///
    /// # Errors
    /// Only [`Operation::Pixellate`] and [`Operation::Jail`] can fail, on
    /// their preconditions; the grid is untouched when they do.
    pub fn apply(&self, grid: &mut PixelGrid) -> Result<(), TransformError> {
        match *self {
            Operation::Invert => tone::invert(grid),
            Operation::Transpose => transform::transpose(grid),
            Operation::ReflectHorizontal => transform::reflect_horizontal(grid),
            Operation::ReflectVertical => transform::reflect_vertical(grid),
            Operation::RotateLeft => transform::rotate_left(grid),
            Operation::RotateRight => transform::rotate_right(grid),
            Operation::Monochromify { sepia } => tone::monochromify(grid, sepia),
            Operation::Vignette => tone::vignette(grid),
            Operation::Pixellate { step } => return block::pixellate(grid, step),
            Operation::Jail(ref style) => return block::jail_with_style(grid, style),
        }
        Ok(())
    }

    /// Whether the operation may swap the grid's width and height.
    pub fn changes_dimensions(&self) -> bool {
        matches!(
            self,
            Operation::Transpose | Operation::RotateLeft | Operation::RotateRight
        )
    }
}

//! Editing actions against the current image of an edit history.
//!
//! The history itself (undo/redo, one grid per edit step) lives outside this
//! crate. It only has to hand out the grid being edited through
//! [`EditHistory`]; every [`Editor`] action mutates that grid in place.

use crate::block::{self, TransformError};
use crate::grid::PixelGrid;
use crate::operation::Operation;
use crate::stego::{self, StegoError};
use crate::{tone, transform};

/// Source of the grid currently being edited.
pub trait EditHistory {
    /// The live grid of the most recent edit step.
    fn current_mut(&mut self) -> &mut PixelGrid;

    /// Read-only view of the live grid.
    fn current(&self) -> &PixelGrid;
}

/// A bare grid is its own single-step history.
impl EditHistory for PixelGrid {
    fn current_mut(&mut self) -> &mut PixelGrid {
        self
    }

    fn current(&self) -> &PixelGrid {
        self
    }
}

/// Collection of image processing actions, one per button.
#[derive(Debug)]
pub struct Editor<H> {
    history: H,
}

impl<H: EditHistory> Editor<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }

    fn grid_mut(&mut self) -> &mut PixelGrid {
        self.history.current_mut()
    }

    pub fn invert(&mut self) {
        tone::invert(self.grid_mut());
    }

    pub fn transpose(&mut self) {
        transform::transpose(self.grid_mut());
    }

    pub fn reflect_horizontal(&mut self) {
        transform::reflect_horizontal(self.grid_mut());
    }

    pub fn reflect_vertical(&mut self) {
        transform::reflect_vertical(self.grid_mut());
    }

    pub fn rotate_right(&mut self) {
        transform::rotate_right(self.grid_mut());
    }

    pub fn rotate_left(&mut self) {
        transform::rotate_left(self.grid_mut());
    }

    pub fn monochromify(&mut self, sepia: bool) {
        tone::monochromify(self.grid_mut(), sepia);
    }

    pub fn vignette(&mut self) {
        tone::vignette(self.grid_mut());
    }

    pub fn pixellate(&mut self, step: usize) -> Result<(), TransformError> {
        block::pixellate(self.grid_mut(), step)
    }

    pub fn jail(&mut self) -> Result<(), TransformError> {
        block::jail(self.grid_mut())
    }

    /// Hide `text` in the current image.
    pub fn encode(&mut self, text: &str) -> Result<(), StegoError> {
        stego::encode(self.grid_mut(), text)
    }

    /// Text hidden in the current image, if any.
    pub fn decode(&self) -> Option<String> {
        stego::decode(self.history.current())
    }

    /// Apply a catalog operation to the current image.
    pub fn apply(&mut self, op: &Operation) -> Result<(), TransformError> {
        op.apply(self.grid_mut())
    }
}

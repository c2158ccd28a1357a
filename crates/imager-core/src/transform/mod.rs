//! Geometric transforms: transpose, quarter-turn rotations and reflections.
//!
//! Transforms that change the grid's shape (transpose and the rotations) read
//! from a [`GridSnapshot`](crate::grid::GridSnapshot) taken before the live grid
//! is reshaped, because source and destination share one buffer. Reflections
//! swap mirrored pairs in place and need no snapshot.
//!
//! # Coordinate System
//!
//! - Positions are `(row, col)` with the origin at the top-left corner
//! - "Right" rotation is clockwise, "left" rotation is counter-clockwise
//! - A horizontal reflection swaps columns, a vertical reflection swaps rows

mod geometric;

pub use geometric::{reflect_horizontal, reflect_vertical, rotate_left, rotate_right, transpose};

//! Snapshot-based remapping and in-place mirroring.
//!
//! For every transform that swaps dimensions we use inverse mapping: for each
//! pixel of the reshaped grid we compute which snapshot pixel lands there.
//!
//! ```text
//! transpose:    dst(row, col) = src(col, row)
//! rotate right: dst(row, col) = src(old_height - 1 - col, row)
//! rotate left:  dst(row, col) = src(col, old_width - 1 - row)
//! ```

use crate::grid::{GridSnapshot, PixelGrid};
use log::debug;

/// Reshape `grid` to the transposed dimensions and fill every position from
/// `source(snapshot, row, col)`.
fn remap_swapped<F>(grid: &mut PixelGrid, source: F)
where
    F: Fn(&GridSnapshot, usize, usize) -> (usize, usize),
{
    let original = grid.snapshot();
    grid.swap_dimensions();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let (src_row, src_col) = source(&original, row, col);
            grid.set(row, col, original.get(src_row, src_col));
        }
    }
}

/// Transpose the grid across its main diagonal.
///
/// The new width is the old height and vice versa.
pub fn transpose(grid: &mut PixelGrid) {
    debug!("transpose {}x{}", grid.width(), grid.height());
    remap_swapped(grid, |_, row, col| (col, row));
}

/// Rotate the grid 90 degrees clockwise.
///
/// Mathematically a transpose followed by a horizontal reflection, done in a
/// single pass over the snapshot.
pub fn rotate_right(grid: &mut PixelGrid) {
    debug!("rotate right {}x{}", grid.width(), grid.height());
    remap_swapped(grid, |src, row, col| (src.height() - 1 - col, row));
}

/// Rotate the grid 90 degrees counter-clockwise.
pub fn rotate_left(grid: &mut PixelGrid) {
    debug!("rotate left {}x{}", grid.width(), grid.height());
    remap_swapped(grid, |src, row, col| (col, src.width() - 1 - row));
}

/// Mirror the grid left-to-right.
///
/// Only the left half of the columns is visited so each pair is swapped once;
/// the middle column of an odd-width grid stays in place.
pub fn reflect_horizontal(grid: &mut PixelGrid) {
    let (width, height) = (grid.width(), grid.height());
    debug!("reflect horizontal {}x{}", width, height);
    for col in 0..width / 2 {
        let mirror = width - 1 - col;
        for row in 0..height {
            grid.swap_pixels((row, col), (row, mirror));
        }
    }
}

/// Mirror the grid top-to-bottom.
pub fn reflect_vertical(grid: &mut PixelGrid) {
    let (width, height) = (grid.width(), grid.height());
    debug!("reflect vertical {}x{}", width, height);
    for row in 0..height / 2 {
        let mirror = height - 1 - row;
        for col in 0..width {
            grid.swap_pixels((row, col), (mirror, col));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgb;

    /// Grid where each pixel encodes its own original position.
    fn test_grid(width: usize, height: usize) -> PixelGrid {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(Rgb::new(row as u8, col as u8, 7));
            }
        }
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    fn origin(p: Rgb) -> (usize, usize) {
        (p.red as usize, p.green as usize)
    }

    #[test]
    fn test_transpose_swaps_dimensions() {
        let mut grid = test_grid(4, 2);
        transpose(&mut grid);
        assert_eq!((grid.width(), grid.height()), (2, 4));
        assert_eq!(grid.len(), 8);
    }

    #[test]
    fn test_transpose_mapping() {
        let mut grid = test_grid(3, 2);
        transpose(&mut grid);
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                assert_eq!(origin(grid.get(row, col)), (col, row));
            }
        }
    }

    #[test]
    fn test_transpose_twice_restores_non_square() {
        let original = test_grid(5, 2);
        let mut grid = original.clone();
        transpose(&mut grid);
        transpose(&mut grid);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_rotate_right_corners() {
        // 3 wide, 2 tall:
        //   a b c
        //   d e f
        // rotated clockwise (2 wide, 3 tall):
        //   d a
        //   e b
        //   f c
        let mut grid = test_grid(3, 2);
        rotate_right(&mut grid);
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(origin(grid.get(0, 0)), (1, 0));
        assert_eq!(origin(grid.get(0, 1)), (0, 0));
        assert_eq!(origin(grid.get(2, 0)), (1, 2));
        assert_eq!(origin(grid.get(2, 1)), (0, 2));
    }

    #[test]
    fn test_rotate_left_corners() {
        // rotated counter-clockwise:
        //   c f
        //   b e
        //   a d
        let mut grid = test_grid(3, 2);
        rotate_left(&mut grid);
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(origin(grid.get(0, 0)), (0, 2));
        assert_eq!(origin(grid.get(0, 1)), (1, 2));
        assert_eq!(origin(grid.get(2, 0)), (0, 0));
        assert_eq!(origin(grid.get(2, 1)), (1, 0));
    }

    #[test]
    fn test_four_right_rotations_identity() {
        let original = test_grid(4, 3);
        let mut grid = original.clone();
        for _ in 0..4 {
            rotate_right(&mut grid);
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn test_left_undoes_right() {
        let original = test_grid(5, 3);
        let mut grid = original.clone();
        rotate_right(&mut grid);
        rotate_left(&mut grid);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_rotate_right_is_transpose_then_mirror() {
        let mut rotated = test_grid(4, 3);
        rotate_right(&mut rotated);

        let mut composed = test_grid(4, 3);
        transpose(&mut composed);
        reflect_horizontal(&mut composed);

        assert_eq!(rotated, composed);
    }

    #[test]
    fn test_reflect_horizontal_odd_width() {
        let mut grid = test_grid(3, 2);
        reflect_horizontal(&mut grid);
        assert_eq!(origin(grid.get(0, 0)), (0, 2));
        assert_eq!(origin(grid.get(0, 1)), (0, 1));
        assert_eq!(origin(grid.get(1, 2)), (1, 0));
    }

    #[test]
    fn test_reflect_vertical_even_height() {
        let mut grid = test_grid(2, 4);
        reflect_vertical(&mut grid);
        assert_eq!(origin(grid.get(0, 1)), (3, 1));
        assert_eq!(origin(grid.get(1, 0)), (2, 0));
        assert_eq!(origin(grid.get(3, 0)), (0, 0));
    }

    #[test]
    fn test_single_pixel_grid() {
        let original = test_grid(1, 1);
        let mut grid = original.clone();
        transpose(&mut grid);
        rotate_right(&mut grid);
        rotate_left(&mut grid);
        reflect_horizontal(&mut grid);
        reflect_vertical(&mut grid);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_single_row_rotation() {
        let mut grid = test_grid(5, 1);
        rotate_right(&mut grid);
        assert_eq!((grid.width(), grid.height()), (1, 5));
        for row in 0..5 {
            assert_eq!(origin(grid.get(row, 0)), (0, row));
        }
    }
}

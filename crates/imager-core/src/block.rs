//! Block-based filters: pixellation and bar overlays.
//!
//! ## Pixellation
//!
//! The grid is partitioned into a lattice of `step x step` blocks whose
//! top-left corners sit at multiples of `step`. Blocks on the right and bottom
//! edges are clipped to the grid, so they may be narrower or shorter. Each
//! block is averaged over exactly its in-bounds pixels and then filled with
//! that average. Blocks are disjoint, so no block ever reads an averaged
//! neighbor.
//!
//! ## Bars
//!
//! A horizontal bar covers 3 full-width rows and a vertical bar covers 4
//! full-height columns. [`jail`] frames the grid with bars and adds evenly
//! spaced vertical bars in between.

use crate::grid::{PixelGrid, Rgb};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows covered by a horizontal bar.
pub const HORIZONTAL_BAR_HEIGHT: usize = 3;
/// Columns covered by a vertical bar.
pub const VERTICAL_BAR_WIDTH: usize = 4;
/// Roughly one inner jail bar is added per this many columns.
pub const JAIL_BAR_SPACING: usize = 50;

/// Precondition failures for block filters.
///
/// Validation always happens before any pixel is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Pixellation step must be positive.
    #[error("Invalid pixellation step {0}: must be greater than zero")]
    InvalidStep(usize),

    /// A bar would extend past the edge of the grid.
    #[error("{axis} bar at {start} needs {span} lines but the grid has {limit}")]
    BarOutOfBounds {
        axis: BarAxis,
        start: usize,
        span: usize,
        limit: usize,
    },

    /// The grid cannot hold the jail's edge bars.
    #[error("Grid {width}x{height} is too small for jail bars (needs at least 4x3)")]
    GridTooSmall { width: usize, height: usize },
}

/// Orientation of a bar overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAxis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for BarAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarAxis::Horizontal => write!(f, "Horizontal"),
            BarAxis::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Integer-truncated mean color of the block at `(top, left)`, clipped to the grid.
fn block_average(grid: &PixelGrid, top: usize, left: usize, step: usize) -> Rgb {
    let bottom = (top + step).min(grid.height());
    let right = (left + step).min(grid.width());

    let (mut r, mut g, mut b) = (0usize, 0usize, 0usize);
    for row in top..bottom {
        for col in left..right {
            let p = grid.get(row, col);
            r += p.red as usize;
            g += p.green as usize;
            b += p.blue as usize;
        }
    }

    let count = (bottom - top) * (right - left);
    Rgb::new((r / count) as u8, (g / count) as u8, (b / count) as u8)
}

fn fill_block(grid: &mut PixelGrid, top: usize, left: usize, step: usize, color: Rgb) {
    let bottom = (top + step).min(grid.height());
    let right = (left + step).min(grid.width());
    for row in top..bottom {
        for col in left..right {
            grid.set(row, col, color);
        }
    }
}

/// Pixellate the grid into `step x step` blocks of averaged color.
///
/// # Errors
/// Returns [`TransformError::InvalidStep`] if `step == 0`.
pub fn pixellate(grid: &mut PixelGrid, step: usize) -> Result<(), TransformError> {
    if step == 0 {
        return Err(TransformError::InvalidStep(step));
    }
    debug!("pixellate {}x{} with step {}", grid.width(), grid.height(), step);

    for top in (0..grid.height()).step_by(step) {
        for left in (0..grid.width()).step_by(step) {
            let avg = block_average(grid, top, left, step);
            fill_block(grid, top, left, step, avg);
        }
    }
    Ok(())
}

/// Paint a 3-row horizontal bar starting at `row`.
///
/// # Errors
/// Returns [`TransformError::BarOutOfBounds`] if `row + 3 > height`.
pub fn draw_horizontal_bar(
    grid: &mut PixelGrid,
    row: usize,
    color: Rgb,
) -> Result<(), TransformError> {
    if row
        .checked_add(HORIZONTAL_BAR_HEIGHT)
        .map_or(true, |end| end > grid.height())
    {
        return Err(TransformError::BarOutOfBounds {
            axis: BarAxis::Horizontal,
            start: row,
            span: HORIZONTAL_BAR_HEIGHT,
            limit: grid.height(),
        });
    }
    for r in row..row + HORIZONTAL_BAR_HEIGHT {
        for col in 0..grid.width() {
            grid.set(r, col, color);
        }
    }
    Ok(())
}

/// Paint a 4-column vertical bar starting at `col`.
///
/// # Errors
/// Returns [`TransformError::BarOutOfBounds`] if `col + 4 > width`.
pub fn draw_vertical_bar(
    grid: &mut PixelGrid,
    col: usize,
    color: Rgb,
) -> Result<(), TransformError> {
    if col
        .checked_add(VERTICAL_BAR_WIDTH)
        .map_or(true, |end| end > grid.width())
    {
        return Err(TransformError::BarOutOfBounds {
            axis: BarAxis::Vertical,
            start: col,
            span: VERTICAL_BAR_WIDTH,
            limit: grid.width(),
        });
    }
    for row in 0..grid.height() {
        for c in col..col + VERTICAL_BAR_WIDTH {
            grid.set(row, c, color);
        }
    }
    Ok(())
}

/// Start columns of the vertical jail bars for a grid of the given width.
///
/// `n = (width - 8) / 50` inner bars (floored, so narrow grids get none) sit
/// between the edge bars. All `n + 3` start columns are `floor(k * dist)` for
/// `k` in `0..=n + 2`, with `dist = (width - 4) / (n + 2)`; the first bar is
/// at column 0 and the last at `width - 4`.
///
/// Returns an empty list when the grid is narrower than one bar.
pub fn jail_bar_columns(width: usize) -> Vec<usize> {
    if width < VERTICAL_BAR_WIDTH {
        return Vec::new();
    }
    let n = (width as i64 - 8).div_euclid(JAIL_BAR_SPACING as i64);
    let intervals = n + 2;
    let dist = (width - VERTICAL_BAR_WIDTH) as f64 / intervals as f64;
    (0..=intervals)
        .map(|k| ((k as f64 * dist) as usize).min(width - VERTICAL_BAR_WIDTH))
        .collect()
}

/// Style for the jail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JailStyle {
    /// Bar color (red by default)
    pub color: Rgb,
}

impl Default for JailStyle {
    fn default() -> Self {
        Self { color: Rgb::RED }
    }
}

/// Put red jail bars on the grid.
pub fn jail(grid: &mut PixelGrid) -> Result<(), TransformError> {
    jail_with_style(grid, &JailStyle::default())
}

/// Put jail bars on the grid: horizontal bars across the top and bottom rows,
/// vertical bars down both edges and evenly spaced bars in between.
///
/// # Errors
/// Returns [`TransformError::GridTooSmall`] if the grid is narrower than 4
/// columns or shorter than 3 rows. Nothing is drawn in that case.
pub fn jail_with_style(grid: &mut PixelGrid, style: &JailStyle) -> Result<(), TransformError> {
    let (width, height) = (grid.width(), grid.height());
    if width < VERTICAL_BAR_WIDTH || height < HORIZONTAL_BAR_HEIGHT {
        return Err(TransformError::GridTooSmall { width, height });
    }

    let columns = jail_bar_columns(width);
    debug!("jail {}x{} with vertical bars at {:?}", width, height, columns);

    draw_horizontal_bar(grid, 0, style.color)?;
    draw_horizontal_bar(grid, height - HORIZONTAL_BAR_HEIGHT, style.color)?;
    for col in columns {
        draw_vertical_bar(grid, col, style.color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x5 grid with distinct values per pixel and channel.
    fn distinct_5x5() -> PixelGrid {
        let pixels = (0..25u8)
            .map(|i| Rgb::new(i * 10, 250 - i * 7, i * 3 + 1))
            .collect();
        PixelGrid::from_pixels(5, 5, pixels).unwrap()
    }

    fn mean(grid: &PixelGrid, rows: std::ops::Range<usize>, cols: std::ops::Range<usize>) -> Rgb {
        let mut sum = [0usize; 3];
        let mut count = 0;
        for r in rows {
            for c in cols.clone() {
                let p = grid.get(r, c);
                sum[0] += p.red as usize;
                sum[1] += p.green as usize;
                sum[2] += p.blue as usize;
                count += 1;
            }
        }
        Rgb::new(
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )
    }

    #[test]
    fn test_pixellate_5x5_step_2() {
        let original = distinct_5x5();
        let mut grid = original.clone();
        pixellate(&mut grid, 2).unwrap();

        let bands = [0..2, 2..4, 4..5];
        for rows in &bands {
            for cols in &bands {
                let expected = mean(&original, rows.clone(), cols.clone());
                for r in rows.clone() {
                    for c in cols.clone() {
                        assert_eq!(grid.get(r, c), expected, "pixel ({r}, {c})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_pixellate_clipped_corner_is_single_pixel() {
        let original = distinct_5x5();
        let mut grid = original.clone();
        pixellate(&mut grid, 2).unwrap();
        // The bottom-right block is 1x1, so its average is itself.
        assert_eq!(grid.get(4, 4), original.get(4, 4));
    }

    #[test]
    fn test_pixellate_known_block_mean() {
        let pixels = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(1, 10, 100),
            Rgb::new(2, 20, 200),
            Rgb::new(4, 40, 255),
        ];
        let mut grid = PixelGrid::from_pixels(2, 2, pixels).unwrap();
        pixellate(&mut grid, 2).unwrap();
        // (0+1+2+4)/4 = 1, (0+10+20+40)/4 = 17, (0+100+200+255)/4 = 138
        assert!(grid.pixels().iter().all(|p| *p == Rgb::new(1, 17, 138)));
    }

    #[test]
    fn test_pixellate_step_one_is_noop() {
        let original = distinct_5x5();
        let mut grid = original.clone();
        pixellate(&mut grid, 1).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_pixellate_step_larger_than_grid() {
        let original = distinct_5x5();
        let mut grid = original.clone();
        pixellate(&mut grid, 100).unwrap();
        let expected = mean(&original, 0..5, 0..5);
        assert!(grid.pixels().iter().all(|p| *p == expected));
    }

    #[test]
    fn test_pixellate_zero_step_rejected() {
        let original = distinct_5x5();
        let mut grid = original.clone();
        assert_eq!(pixellate(&mut grid, 0), Err(TransformError::InvalidStep(0)));
        assert_eq!(grid, original);
    }

    #[test]
    fn test_horizontal_bar() {
        let mut grid = PixelGrid::new(4, 6).unwrap();
        draw_horizontal_bar(&mut grid, 2, Rgb::WHITE).unwrap();
        for row in 0..6 {
            let expected = if (2..5).contains(&row) { Rgb::WHITE } else { Rgb::BLACK };
            for col in 0..4 {
                assert_eq!(grid.get(row, col), expected);
            }
        }
    }

    #[test]
    fn test_vertical_bar() {
        let mut grid = PixelGrid::new(6, 2).unwrap();
        draw_vertical_bar(&mut grid, 1, Rgb::WHITE).unwrap();
        for col in 0..6 {
            let expected = if (1..5).contains(&col) { Rgb::WHITE } else { Rgb::BLACK };
            assert_eq!(grid.get(0, col), expected);
            assert_eq!(grid.get(1, col), expected);
        }
    }

    #[test]
    fn test_bar_out_of_bounds() {
        let mut grid = PixelGrid::new(6, 4).unwrap();
        assert_eq!(
            draw_horizontal_bar(&mut grid, 2, Rgb::RED),
            Err(TransformError::BarOutOfBounds {
                axis: BarAxis::Horizontal,
                start: 2,
                span: 3,
                limit: 4
            })
        );
        assert!(draw_vertical_bar(&mut grid, 3, Rgb::RED).is_err());
        assert!(grid.pixels().iter().all(|p| *p == Rgb::BLACK));
    }

    #[test]
    fn test_bar_start_near_usize_max() {
        let mut grid = PixelGrid::new(6, 4).unwrap();
        assert_eq!(
            draw_horizontal_bar(&mut grid, usize::MAX - 1, Rgb::RED),
            Err(TransformError::BarOutOfBounds {
                axis: BarAxis::Horizontal,
                start: usize::MAX - 1,
                span: 3,
                limit: 4
            })
        );
        assert_eq!(
            draw_vertical_bar(&mut grid, usize::MAX, Rgb::RED),
            Err(TransformError::BarOutOfBounds {
                axis: BarAxis::Vertical,
                start: usize::MAX,
                span: 4,
                limit: 6
            })
        );
        assert!(grid.pixels().iter().all(|p| *p == Rgb::BLACK));
    }

    #[test]
    fn test_jail_bar_columns_width_120() {
        // n = (120 - 8) / 50 = 2, dist = (120 - 4) / 4 = 29
        assert_eq!(jail_bar_columns(120), vec![0, 29, 58, 87, 116]);
    }

    #[test]
    fn test_jail_bar_columns_narrow() {
        // n = 0 for widths below 58
        assert_eq!(jail_bar_columns(20), vec![0, 8, 16]);
        // Below 8 the floored count goes negative and only edge bars remain
        assert_eq!(jail_bar_columns(6), vec![0, 2]);
        assert_eq!(jail_bar_columns(4), vec![0, 0]);
        assert!(jail_bar_columns(3).is_empty());
    }

    #[test]
    fn test_jail_bar_columns_uneven_spacing() {
        // n = (111 - 8) / 50 = 2, dist = 107 / 4 = 26.75
        assert_eq!(jail_bar_columns(111), vec![0, 26, 53, 80, 107]);
    }

    #[test]
    fn test_jail_draws_frame() {
        let mut grid = PixelGrid::new(120, 20).unwrap();
        jail(&mut grid).unwrap();

        // Top and bottom bars
        for col in 0..120 {
            for row in [0, 1, 2, 17, 18, 19] {
                assert_eq!(grid.get(row, col), Rgb::RED);
            }
        }
        // Vertical bars, including the right edge bar
        for start in [0, 29, 58, 87, 116] {
            for col in start..start + 4 {
                assert_eq!(grid.get(10, col), Rgb::RED);
            }
        }
        // Untouched interior pixel between bars
        assert_eq!(grid.get(10, 10), Rgb::BLACK);
        assert_eq!(grid.get(10, 33), Rgb::BLACK);
    }

    #[test]
    fn test_jail_custom_color() {
        let mut grid = PixelGrid::new(10, 5).unwrap();
        let style = JailStyle {
            color: Rgb::new(0, 0, 255),
        };
        jail_with_style(&mut grid, &style).unwrap();
        assert_eq!(grid.get(0, 5), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_jail_too_small() {
        let mut grid = PixelGrid::new(3, 10).unwrap();
        assert_eq!(
            jail(&mut grid),
            Err(TransformError::GridTooSmall {
                width: 3,
                height: 10
            })
        );
        let mut grid = PixelGrid::new(10, 2).unwrap();
        assert!(jail(&mut grid).is_err());
        assert!(grid.pixels().iter().all(|p| *p == Rgb::BLACK));
    }

    #[test]
    fn test_transform_error_display() {
        assert_eq!(
            TransformError::InvalidStep(0).to_string(),
            "Invalid pixellation step 0: must be greater than zero"
        );
        let err = TransformError::BarOutOfBounds {
            axis: BarAxis::Vertical,
            start: 8,
            span: 4,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "Vertical bar at 8 needs 4 lines but the grid has 10"
        );
    }
}

//! Lossless clockwise rotation in quarter turns.
//!
//! A quarter turn maps the cell at `(row, col)` to `(col, rows - 1 - row)`,
//! so the output has the input's height as its width and vice versa.

use super::TransformError;
use crate::grid::PixelGrid;

/// Rotate the grid 90 degrees clockwise.
///
/// # Example
///
/// ```
/// use bmpedit_core::{transform::rotate_90_cw, Pixel, PixelGrid};
///
/// let grid = PixelGrid::from_rows(&[vec![Pixel::RED, Pixel::BLUE]]).unwrap();
/// let rotated = rotate_90_cw(&grid);
/// assert_eq!((rotated.width(), rotated.height()), (1, 2));
/// assert_eq!(rotated.get(0, 0), Pixel::RED);
/// assert_eq!(rotated.get(1, 0), Pixel::BLUE);
/// ```
pub fn rotate_90_cw(grid: &PixelGrid) -> PixelGrid {
    if grid.is_empty() {
        return PixelGrid::empty();
    }
    let rows = grid.height();
    // Output cell (r, c) came from input (rows - 1 - c, r)
    PixelGrid::from_fn(grid.height(), grid.width(), |row, col| {
        grid.get(rows - 1 - col, row)
    })
}

/// Rotate the grid clockwise by `count` quarter turns.
///
/// Any count is accepted; it is reduced modulo 4, so negative counts turn
/// counter-clockwise and a count of 4 returns an identical copy.
pub fn rotate_quarter_turns(grid: &PixelGrid, count: i64) -> PixelGrid {
    let turns = count.rem_euclid(4);
    log::debug!("rotating {}x{} by {turns} quarter turns", grid.width(), grid.height());
    (0..turns).fold(grid.clone(), |acc, _| rotate_90_cw(&acc))
}

/// Rotate the grid clockwise by `degrees`.
///
/// Only whole quarter turns are supported; any other angle is rejected
/// without touching the image.
pub fn rotate_by_degrees(grid: &PixelGrid, degrees: i64) -> Result<PixelGrid, TransformError> {
    if degrees % 90 != 0 {
        return Err(TransformError::InvalidAngle(degrees));
    }
    Ok(rotate_quarter_turns(grid, degrees / 90))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Pixel;

    /// 3 wide, 2 tall; every pixel distinct.
    fn test_grid() -> PixelGrid {
        PixelGrid::from_fn(3, 2, |row, col| Pixel::new(row as u8, col as u8, 0))
    }

    #[test]
    fn test_rotate_90_swaps_dimensions() {
        let rotated = rotate_90_cw(&test_grid());
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
    }

    #[test]
    fn test_rotate_90_cell_mapping() {
        let grid = test_grid();
        let rotated = rotate_90_cw(&grid);
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                assert_eq!(
                    rotated.get(col, grid.height() - 1 - row),
                    grid.get(row, col),
                    "input ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_rotate_90_corners() {
        // a b
        // c d   ->   c a
        //            d b
        let (a, b, c, d) = (Pixel::gray(1), Pixel::gray(2), Pixel::gray(3), Pixel::gray(4));
        let grid = PixelGrid::from_rows(&[vec![a, b], vec![c, d]]).unwrap();
        let rotated = rotate_90_cw(&grid);
        assert_eq!(rotated.to_rows(), vec![vec![c, a], vec![d, b]]);
    }

    #[test]
    fn test_quarter_turns_zero_and_four_are_identity() {
        let grid = test_grid();
        assert_eq!(rotate_quarter_turns(&grid, 0), grid);
        assert_eq!(rotate_quarter_turns(&grid, 4), grid);
        assert_eq!(rotate_quarter_turns(&grid, 8), grid);
    }

    #[test]
    fn test_quarter_turns_negative() {
        let grid = test_grid();
        assert_eq!(rotate_quarter_turns(&grid, -1), rotate_quarter_turns(&grid, 3));
        assert_eq!(rotate_quarter_turns(&grid, -2), rotate_quarter_turns(&grid, 2));
    }

    #[test]
    fn test_half_turn() {
        let grid = test_grid();
        let rotated = rotate_quarter_turns(&grid, 2);
        assert_eq!((rotated.width(), rotated.height()), (3, 2));
        assert_eq!(rotated.get(0, 0), grid.get(1, 2));
        assert_eq!(rotated.get(1, 2), grid.get(0, 0));
    }

    #[test]
    fn test_rotate_by_degrees() {
        let grid = test_grid();
        assert_eq!(rotate_by_degrees(&grid, 90), Ok(rotate_90_cw(&grid)));
        assert_eq!(rotate_by_degrees(&grid, 360), Ok(grid.clone()));
        assert_eq!(rotate_by_degrees(&grid, -90), Ok(rotate_quarter_turns(&grid, 3)));
    }

    #[test]
    fn test_rotate_by_degrees_rejects_partial_turns() {
        let grid = test_grid();
        assert_eq!(
            rotate_by_degrees(&grid, 45),
            Err(TransformError::InvalidAngle(45))
        );
        assert!(rotate_by_degrees(&grid, 91).is_err());
    }

    #[test]
    fn test_rotate_single_pixel_and_empty() {
        let single = PixelGrid::filled(1, 1, Pixel::RED);
        assert_eq!(rotate_90_cw(&single), single);
        assert!(rotate_90_cw(&PixelGrid::empty()).is_empty());
        assert!(rotate_quarter_turns(&PixelGrid::empty(), 3).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

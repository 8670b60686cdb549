//! Nearest-neighbor enlargement by independent integer factors.

use super::TransformError;
use crate::encode::encoded_size;
use crate::grid::PixelGrid;

/// Enlarge the grid `x_scale` times horizontally and `y_scale` times vertically.
///
/// Each output cell `(row, col)` copies input `(row / y_scale, col / x_scale)`,
/// so every source pixel becomes a `x_scale` by `y_scale` block.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScale`] if either factor is zero and
/// [`TransformError::DimensionsTooLarge`] if the result would be too large to
/// save as a bitmap (see [`encoded_size`]).
pub fn apply_enlarge(
    grid: &PixelGrid,
    x_scale: u32,
    y_scale: u32,
) -> Result<PixelGrid, TransformError> {
    if x_scale == 0 || y_scale == 0 {
        return Err(TransformError::InvalidScale { x_scale, y_scale });
    }
    if grid.is_empty() {
        return Ok(PixelGrid::empty());
    }

    let too_large = || TransformError::DimensionsTooLarge {
        width: grid.width(),
        height: grid.height(),
        x_scale,
        y_scale,
    };
    let new_width = grid.width().checked_mul(x_scale).ok_or_else(too_large)?;
    let new_height = grid.height().checked_mul(y_scale).ok_or_else(too_large)?;
    if encoded_size(new_width, new_height).is_none() {
        return Err(too_large());
    }

    log::debug!(
        "enlarging {}x{} to {new_width}x{new_height}",
        grid.width(),
        grid.height()
    );

    Ok(PixelGrid::from_fn(new_width, new_height, |row, col| {
        grid.get(row / y_scale, col / x_scale)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Pixel;

    #[test]
    fn test_enlarge_single_pixel_horizontally() {
        let grid = PixelGrid::filled(1, 1, Pixel::new(10, 20, 30));
        let result = apply_enlarge(&grid, 2, 1).unwrap();
        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 1);
        assert!(result.pixels().iter().all(|&p| p == Pixel::new(10, 20, 30)));
    }

    #[test]
    fn test_enlarge_block_layout() {
        // a b   ->   a a a b b b
        //            a a a b b b
        let (a, b) = (Pixel::RED, Pixel::BLUE);
        let grid = PixelGrid::from_rows(&[vec![a, b]]).unwrap();
        let result = apply_enlarge(&grid, 3, 2).unwrap();
        assert_eq!((result.width(), result.height()), (6, 2));
        for row in result.rows() {
            assert_eq!(row, &[a, a, a, b, b, b]);
        }
    }

    #[test]
    fn test_enlarge_uses_integer_division() {
        let grid = PixelGrid::from_fn(2, 2, |row, col| Pixel::new(row as u8, col as u8, 0));
        let result = apply_enlarge(&grid, 2, 3).unwrap();
        assert_eq!((result.width(), result.height()), (4, 6));
        assert_eq!(result.get(2, 1), Pixel::new(0, 0, 0));
        assert_eq!(result.get(3, 2), Pixel::new(1, 1, 0));
        assert_eq!(result.get(5, 3), Pixel::new(1, 1, 0));
    }

    #[test]
    fn test_enlarge_identity() {
        let grid = PixelGrid::from_fn(3, 4, |row, col| Pixel::gray((row * 3 + col) as u8));
        assert_eq!(apply_enlarge(&grid, 1, 1).unwrap(), grid);
    }

    #[test]
    fn test_enlarge_zero_scale() {
        let grid = PixelGrid::filled(2, 2, Pixel::BLACK);
        assert_eq!(
            apply_enlarge(&grid, 0, 3),
            Err(TransformError::InvalidScale {
                x_scale: 0,
                y_scale: 3
            })
        );
        assert!(apply_enlarge(&grid, 1, 0).is_err());
    }

    #[test]
    fn test_enlarge_overflow() {
        let grid = PixelGrid::filled(2, 1, Pixel::BLACK);
        assert!(matches!(
            apply_enlarge(&grid, u32::MAX, 1),
            Err(TransformError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn test_enlarge_too_large_for_bitmap() {
        let grid = PixelGrid::filled(1, 1, Pixel::WHITE);
        assert_eq!(
            apply_enlarge(&grid, 100_000, 100_000),
            Err(TransformError::DimensionsTooLarge {
                width: 1,
                height: 1,
                x_scale: 100_000,
                y_scale: 100_000
            })
        );
        // wide but shallow results stay within the limit
        assert!(apply_enlarge(&grid, 1000, 1).is_ok());
        assert!(apply_enlarge(&grid, 65536, 21846).is_err());
    }

    #[test]
    fn test_enlarge_empty() {
        assert!(apply_enlarge(&PixelGrid::empty(), 2, 2).unwrap().is_empty());
    }
}

//! Tonal adjustments driven by a scaling factor or by position.
//!
//! Every function reads the input grid and returns a new one of the same
//! shape. Channel math is done in `f64` and narrowed with
//! [`narrow`](crate::grid::narrow): truncated toward zero, saturated to
//! `[0, 255]`.
//!
//! ## Adjustments
//! - Vignette: darken toward the corners
//! - Clarendon: push light pixels lighter and dark pixels darker
//! - Lighten: pull every channel toward white
//! - Darken: scale every channel toward black

use crate::grid::{Pixel, PixelGrid};

/// Average at or above which Clarendon treats a pixel as light.
pub const CLARENDON_LIGHT_THRESHOLD: u8 = 170;

/// Average below which Clarendon treats a pixel as dark.
pub const CLARENDON_DARK_THRESHOLD: u8 = 90;

/// Darken pixels in proportion to their distance from the center.
///
/// The center is `(rows / 2, cols / 2)` with integer division. Each channel
/// is multiplied by `(cols - distance) / cols`, where `distance` is the
/// Euclidean distance in pixels. Far corners of tall images can get a
/// negative scale, which saturates to black.
pub fn apply_vignette(grid: &PixelGrid) -> PixelGrid {
    let center_row = (grid.height() / 2) as f64;
    let center_col = (grid.width() / 2) as f64;
    let cols = grid.width() as f64;

    grid.map_indexed(|row, col, pixel| {
        let distance = (row as f64 - center_row).hypot(col as f64 - center_col);
        let scale = (cols - distance) / cols;
        pixel.map_channels(|c| c * scale)
    })
}

/// Apply the Clarendon effect: light pixels lighter, dark pixels darker.
///
/// With `average = (r + g + b) / 3` (integer division):
/// - `average >= 170`: `channel = 255 - (255 - channel) * factor`
/// - `average < 90`: `channel = channel * factor`
/// - otherwise the pixel is unchanged
pub fn apply_clarendon(grid: &PixelGrid, factor: f64) -> PixelGrid {
    grid.map(|pixel| clarendon_pixel(pixel, factor))
}

#[inline]
fn clarendon_pixel(pixel: Pixel, factor: f64) -> Pixel {
    let average = pixel.average();
    if average >= CLARENDON_LIGHT_THRESHOLD {
        lighten_pixel(pixel, factor)
    } else if average < CLARENDON_DARK_THRESHOLD {
        darken_pixel(pixel, factor)
    } else {
        pixel
    }
}

/// Lighten every pixel.
///
/// Formula: `channel = 255 - (255 - channel) * factor`
///
/// A factor below 1 moves channels toward white; 0 produces white.
pub fn apply_lighten(grid: &PixelGrid, factor: f64) -> PixelGrid {
    grid.map(|pixel| lighten_pixel(pixel, factor))
}

#[inline]
fn lighten_pixel(pixel: Pixel, factor: f64) -> Pixel {
    pixel.map_channels(|c| 255.0 - (255.0 - c) * factor)
}

/// Darken every pixel.
///
/// Formula: `channel = channel * factor`
///
/// # Example
/// ```
/// use bmpedit_core::{adjustments::apply_darken, Pixel, PixelGrid};
///
/// let grid = PixelGrid::filled(1, 1, Pixel::new(200, 100, 50));
/// let dark = apply_darken(&grid, 0.5);
/// assert_eq!(dark.get(0, 0), Pixel::new(100, 50, 25));
/// ```
pub fn apply_darken(grid: &PixelGrid, factor: f64) -> PixelGrid {
    grid.map(|pixel| darken_pixel(pixel, factor))
}

#[inline]
fn darken_pixel(pixel: Pixel, factor: f64) -> Pixel {
    pixel.map_channels(|c| c * factor)
}

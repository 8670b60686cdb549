//! Tone reduction: grayscale, two-level high contrast and 5-color posterize.
//!
//! These operate on the channel sum or integer channel average rather than a
//! perceptual luminance, so a pixel's three channels carry equal weight.

use crate::grid::{Pixel, PixelGrid};

/// Average at or above which high contrast produces white (127.5 truncated).
pub const HIGH_CONTRAST_THRESHOLD: u8 = 127;

/// Channel sum at or above which posterize produces white.
pub const POSTERIZE_WHITE_SUM: u32 = 550;

/// Channel sum at or below which posterize produces black.
pub const POSTERIZE_BLACK_SUM: u32 = 150;

/// Replace every pixel with the integer average of its channels.
pub fn apply_grayscale(grid: &PixelGrid) -> PixelGrid {
    grid.map(|pixel| Pixel::gray(pixel.average()))
}

/// Reduce every pixel to black or white.
///
/// Formula: `average >= 127 ? white : black`, with `average = (r + g + b) / 3`
pub fn apply_high_contrast(grid: &PixelGrid) -> PixelGrid {
    grid.map(high_contrast_pixel)
}

#[inline]
fn high_contrast_pixel(pixel: Pixel) -> Pixel {
    if pixel.average() >= HIGH_CONTRAST_THRESHOLD {
        Pixel::WHITE
    } else {
        Pixel::BLACK
    }
}

/// Reduce every pixel to one of black, white, red, green or blue.
///
/// Very light pixels (channel sum at least 550) become white and very dark
/// ones (at most 150) become black. Everything else becomes the pure primary
/// of its largest channel; ties go to red, then green.
pub fn apply_posterize(grid: &PixelGrid) -> PixelGrid {
    grid.map(posterize_pixel)
}

#[inline]
fn posterize_pixel(pixel: Pixel) -> Pixel {
    let sum = pixel.channel_sum();
    if sum >= POSTERIZE_WHITE_SUM {
        return Pixel::WHITE;
    }
    if sum <= POSTERIZE_BLACK_SUM {
        return Pixel::BLACK;
    }

    let max = pixel.red.max(pixel.green).max(pixel.blue);
    if pixel.red == max {
        Pixel::RED
    } else if pixel.green == max {
        Pixel::GREEN
    } else {
        Pixel::BLUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(pixel: Pixel) -> PixelGrid {
        PixelGrid::filled(1, 1, pixel)
    }

    fn first(grid: &PixelGrid) -> Pixel {
        grid.get(0, 0)
    }

    #[test]
    fn test_grayscale_integer_average() {
        let result = apply_grayscale(&single(Pixel::new(10, 20, 31)));
        // 61 / 3 = 20
        assert_eq!(first(&result), Pixel::gray(20));
    }

    #[test]
    fn test_grayscale_keeps_gray() {
        let result = apply_grayscale(&single(Pixel::gray(77)));
        assert_eq!(first(&result), Pixel::gray(77));
    }

    #[test]
    fn test_high_contrast_threshold() {
        assert_eq!(first(&apply_high_contrast(&single(Pixel::gray(127)))), Pixel::WHITE);
        assert_eq!(first(&apply_high_contrast(&single(Pixel::gray(126)))), Pixel::BLACK);
        // (127 + 127 + 128) / 3 = 127
        assert_eq!(
            first(&apply_high_contrast(&single(Pixel::new(127, 127, 128)))),
            Pixel::WHITE
        );
        // (127 + 127 + 126) / 3 = 126
        assert_eq!(
            first(&apply_high_contrast(&single(Pixel::new(127, 127, 126)))),
            Pixel::BLACK
        );
    }

    #[test]
    fn test_posterize_white_and_black() {
        assert_eq!(first(&apply_posterize(&single(Pixel::new(200, 200, 150)))), Pixel::WHITE);
        assert_eq!(first(&apply_posterize(&single(Pixel::new(200, 200, 149)))), Pixel::RED);
        assert_eq!(first(&apply_posterize(&single(Pixel::new(50, 50, 50)))), Pixel::BLACK);
        assert_eq!(first(&apply_posterize(&single(Pixel::new(50, 50, 51)))), Pixel::BLUE);
    }

    #[test]
    fn test_posterize_dominant_channel() {
        assert_eq!(first(&apply_posterize(&single(Pixel::new(200, 10, 10)))), Pixel::RED);
        assert_eq!(first(&apply_posterize(&single(Pixel::new(10, 200, 10)))), Pixel::GREEN);
        assert_eq!(first(&apply_posterize(&single(Pixel::new(10, 10, 200)))), Pixel::BLUE);
    }

    #[test]
    fn test_posterize_ties_prefer_red_then_green() {
        assert_eq!(first(&apply_posterize(&single(Pixel::new(100, 100, 100)))), Pixel::RED);
        assert_eq!(first(&apply_posterize(&single(Pixel::new(10, 100, 100)))), Pixel::GREEN);
        assert_eq!(first(&apply_posterize(&single(Pixel::new(100, 10, 100)))), Pixel::RED);
    }

    #[test]
    fn test_tone_preserves_shape() {
        let grid = PixelGrid::from_fn(5, 2, |r, c| Pixel::new(r as u8 * 100, c as u8 * 50, 60));
        for result in [
            apply_grayscale(&grid),
            apply_high_contrast(&grid),
            apply_posterize(&grid),
        ] {
            assert_eq!((result.width(), result.height()), (5, 2));
        }
        assert!(apply_posterize(&PixelGrid::empty()).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

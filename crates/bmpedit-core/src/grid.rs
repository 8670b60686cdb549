//! The decoded pixel grid shared by the codec and every transform.
//!
//! Row 0 is the top of the displayed image and column 0 is its left edge.
//! Pixels are stored row-major in a single buffer, which keeps the grid
//! rectangular by construction.

use serde::{Deserialize, Serialize};

/// A single 24-bit RGB pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
    pub const RED: Pixel = Pixel::new(255, 0, 0);
    pub const GREEN: Pixel = Pixel::new(0, 255, 0);
    pub const BLUE: Pixel = Pixel::new(0, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// A pixel with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Sum of the three channels.
    #[inline]
    pub fn channel_sum(self) -> u32 {
        self.red as u32 + self.green as u32 + self.blue as u32
    }

    /// Integer average of the three channels (truncating division).
    #[inline]
    pub fn average(self) -> u8 {
        (self.channel_sum() / 3) as u8
    }

    /// Apply `f` to every channel, narrowing each result with [`narrow`].
    #[inline]
    pub fn map_channels(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            red: narrow(f(self.red as f64)),
            green: narrow(f(self.green as f64)),
            blue: narrow(f(self.blue as f64)),
        }
    }
}

/// Narrow a real-valued channel result to 8 bits.
///
/// Truncates toward zero and saturates to `[0, 255]`; NaN becomes 0.
#[inline]
pub fn narrow(value: f64) -> u8 {
    value as u8
}

/// A rectangular grid of pixels.
///
/// Dimensions are fixed at construction; transforms always build a new grid.
/// An empty grid (zero rows) is how the decoder reports an invalid image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid from row-major pixels.
    ///
    /// Returns `None` when `pixels.len()` is not `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid of `width` x `height` pixels all equal to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from nested rows, top row first.
    ///
    /// Returns `None` if the rows are not all the same length. An empty
    /// slice produces an empty grid.
    pub fn from_rows(rows: &[Vec<Pixel>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let width = u32::try_from(width).ok()?;
        let height = u32::try_from(rows.len()).ok()?;
        let pixels = rows.iter().flatten().copied().collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// The empty grid returned for invalid images.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if the grid has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Pixel {
        self.pixels[self.index(row, col)]
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    pub fn try_get(&self, row: u32, col: u32) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.get(row, col))
        } else {
            None
        }
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row as usize * self.width as usize + col as usize
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        // chunks_exact panics on a zero chunk size
        let width = (self.width as usize).max(1);
        self.pixels.chunks_exact(width)
    }

    /// Copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Apply `f` to every pixel, producing a new grid of the same shape.
    pub fn map(&self, f: impl Fn(Pixel) -> Pixel) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Apply `f(row, col, pixel)` to every pixel, producing a new grid.
    pub fn map_indexed(&self, f: impl Fn(u32, u32, Pixel) -> Pixel) -> Self {
        Self::from_fn(self.width, self.height, |row, col| {
            f(row, col, self.get(row, col))
        })
    }

    /// Create a grid from an `image::RgbImage`.
    pub fn from_rgb_image(img: &image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Pixel::new(p[0], p[1], p[2]))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an `image::RgbImage` for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let raw = self
            .pixels
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue])
            .collect();
        image::RgbImage::from_raw(self.width, self.height, raw)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

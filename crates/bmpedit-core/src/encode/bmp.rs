//! 24-bit uncompressed BMP encoding.
//!
//! Output layout: a 14-byte file header, a 40-byte BITMAPINFOHEADER, then
//! the pixel rows bottom-up in blue, green, red order, each padded with zero
//! bytes to a multiple of 4. Every multi-byte field is little-endian.

use std::path::Path;

use thiserror::Error;

use crate::decode::row_padding;
use crate::grid::PixelGrid;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const PIXEL_ARRAY_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
const BITS_PER_PIXEL: u16 = 24;
/// 72 DPI expressed in pixels per meter.
const RESOLUTION_PPM: u32 = 2835;

/// Errors that can occur during BMP encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The grid has no rows or no columns
    #[error("Cannot encode an empty image ({width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    /// The file size would not fit the 32-bit header field
    #[error("Dimensions too large for BMP: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// Writing the destination failed
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Sizes derived from the grid dimensions.
struct Layout {
    padding: usize,
    pixel_array_bytes: u32,
    file_size: u32,
}

impl Layout {
    fn new(width: u32, height: u32) -> Result<Self, EncodeError> {
        let too_large = || EncodeError::DimensionsTooLarge { width, height };
        let scanline = width as u64 * 3;
        let padding = row_padding(scanline);
        let pixel_array_bytes = (scanline + padding)
            .checked_mul(height as u64)
            .ok_or_else(too_large)?;
        let file_size = pixel_array_bytes + PIXEL_ARRAY_OFFSET as u64;
        Ok(Self {
            padding: padding as usize,
            pixel_array_bytes: u32::try_from(pixel_array_bytes).map_err(|_| too_large())?,
            file_size: u32::try_from(file_size).map_err(|_| too_large())?,
        })
    }
}

/// Size in bytes of the file [`encode_bmp`] would produce for a
/// `width` x `height` grid, or `None` when it exceeds the 32-bit size field.
pub fn encoded_size(width: u32, height: u32) -> Option<u32> {
    Layout::new(width, height).ok().map(|layout| layout.file_size)
}

/// Encode a pixel grid to BMP bytes.
///
/// # Errors
///
/// Returns [`EncodeError::EmptyGrid`] when the grid has no pixels and
/// [`EncodeError::DimensionsTooLarge`] when the file would exceed 4 GiB.
///
/// # Example
///
/// ```
/// use bmpedit_core::encode::encode_bmp;
/// use bmpedit_core::{Pixel, PixelGrid};
///
/// let grid = PixelGrid::filled(2, 2, Pixel::new(10, 20, 30));
/// let bmp = encode_bmp(&grid).unwrap();
/// assert_eq!(&bmp[0..2], b"BM");
/// assert_eq!(bmp.len(), 54 + 8 * 2);
/// ```
pub fn encode_bmp(grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
    if grid.is_empty() {
        return Err(EncodeError::EmptyGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let layout = Layout::new(grid.width(), grid.height())?;
    let mut out = Vec::with_capacity(layout.file_size as usize);
    write_headers(&mut out, grid.width(), grid.height(), &layout);

    for row in grid.rows().rev() {
        for pixel in row {
            out.extend_from_slice(&[pixel.blue, pixel.green, pixel.red]);
        }
        out.resize(out.len() + layout.padding, 0);
    }

    debug_assert_eq!(out.len(), layout.file_size as usize);
    log::debug!(
        "encoded {}x{} bitmap ({} bytes)",
        grid.width(),
        grid.height(),
        out.len()
    );
    Ok(out)
}

fn write_headers(out: &mut Vec<u8>, width: u32, height: u32, layout: &Layout) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&layout.file_size.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&PIXEL_ARRAY_OFFSET.to_le_bytes());

    // Info header (40 bytes)
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // color planes
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    out.extend_from_slice(&layout.pixel_array_bytes.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // palette colors
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}

/// Encode `grid` and write it to `path`.
///
/// The image is fully encoded before the destination is opened, so an
/// encoding failure never creates or touches the file. If the write itself
/// fails partway, the destination may be left holding an incomplete file;
/// the error is returned.
pub fn write_image(path: impl AsRef<Path>, grid: &PixelGrid) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_bmp(grid)?;
    std::fs::write(path, &bytes).map_err(|source| EncodeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Write `grid` to `path`, returning whether it succeeded.
///
/// Failures are logged at warn level. Use [`write_image`] to get the reason.
pub fn save_image(path: impl AsRef<Path>, grid: &PixelGrid) -> bool {
    match write_image(path, grid) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to write image: {e}");
            false
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_bmp;
    use crate::grid::Pixel;
    use proptest::prelude::*;

    /// Strategy for generating a grid with random pixels (keep small for speed).
    fn grid_strategy() -> impl Strategy<Value = PixelGrid> {
        (1u32..=17, 1u32..=17).prop_flat_map(|(width, height)| {
            let size = (width * height) as usize;
            prop::collection::vec(any::<(u8, u8, u8)>(), size..=size).prop_map(move |raw| {
                let pixels = raw
                    .into_iter()
                    .map(|(r, g, b)| Pixel::new(r, g, b))
                    .collect();
                PixelGrid::from_pixels(width, height, pixels).unwrap()
            })
        })
    }

    proptest! {
        /// Property: decoding an encoded grid gives back the same grid.
        #[test]
        fn prop_round_trip(grid in grid_strategy()) {
            let bmp = encode_bmp(&grid).unwrap();
            prop_assert_eq!(decode_bmp(&bmp), grid);
        }

        /// Property: every scanline is a multiple of 4 bytes.
        #[test]
        fn prop_scanlines_aligned(grid in grid_strategy()) {
            let bmp = encode_bmp(&grid).unwrap();
            let array = bmp.len() - 54;
            prop_assert_eq!(array % grid.height() as usize, 0);
            prop_assert_eq!((array / grid.height() as usize) % 4, 0);
        }

        /// Property: the declared file size matches the output length.
        #[test]
        fn prop_declared_size_matches(grid in grid_strategy()) {
            let bmp = encode_bmp(&grid).unwrap();
            let declared = u32::from_le_bytes([bmp[2], bmp[3], bmp[4], bmp[5]]);
            prop_assert_eq!(declared as usize, bmp.len());
        }
    }
}

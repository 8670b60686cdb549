//! Uncompressed 24-bit BMP decoding.
//!
//! The pixel array is stored bottom row first, each pixel as blue, green,
//! red, and each scanline padded with zero bytes to a multiple of 4. The
//! decoder undoes all three so the returned grid is top-down RGB.

use std::path::Path;

use super::fields::{read_u16, read_u32};
use super::types::{BitmapHeader, DecodeError};
use crate::grid::{Pixel, PixelGrid};

const FILE_SIZE_OFFSET: usize = 2;
const PIXEL_OFFSET_OFFSET: usize = 10;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BITS_PER_PIXEL_OFFSET: usize = 28;

/// Parse the header fields the decoder relies on.
pub fn parse_header(data: &[u8]) -> Result<BitmapHeader, DecodeError> {
    Ok(BitmapHeader {
        file_size: read_u32(data, FILE_SIZE_OFFSET).ok_or(DecodeError::MissingField("file size"))?,
        pixel_offset: read_u32(data, PIXEL_OFFSET_OFFSET)
            .ok_or(DecodeError::MissingField("pixel array offset"))?,
        width: read_u32(data, WIDTH_OFFSET).ok_or(DecodeError::MissingField("width"))?,
        height: read_u32(data, HEIGHT_OFFSET).ok_or(DecodeError::MissingField("height"))?,
        bits_per_pixel: read_u16(data, BITS_PER_PIXEL_OFFSET)
            .ok_or(DecodeError::MissingField("bits per pixel"))?,
    })
}

/// Check that `data` holds a decodable bitmap and return its header.
///
/// The declared file size must equal the pixel array offset plus the padded
/// scanline length times the height. Beyond that, the bit depth must be 24
/// or 32 and the pixel array must fit inside `data`.
pub fn validate_bmp(data: &[u8]) -> Result<BitmapHeader, DecodeError> {
    let header = parse_header(data)?;
    log::debug!(
        "bmp header: size={} offset={} {}x{} {}bpp",
        header.file_size,
        header.pixel_offset,
        header.width,
        header.height,
        header.bits_per_pixel
    );

    let too_large = DecodeError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    let computed = header.computed_file_size().ok_or(too_large)?;
    if header.file_size as u64 != computed {
        return Err(DecodeError::SizeMismatch {
            declared: header.file_size as u64,
            computed,
        });
    }

    if !matches!(header.bits_per_pixel, 24 | 32) {
        return Err(DecodeError::UnsupportedBitDepth(header.bits_per_pixel));
    }

    // computed == pixel_offset + pixel array, i.e. the last byte we will read
    let actual = data.len() as u64;
    if actual < computed {
        return Err(DecodeError::Truncated {
            needed: computed,
            actual,
        });
    }

    Ok(header)
}

/// Decode BMP bytes into a pixel grid.
///
/// Returns an empty grid when the data is not a valid image; the reason is
/// logged at warn level. Use [`validate_bmp`] to obtain it as a value.
pub fn decode_bmp(data: &[u8]) -> PixelGrid {
    match validate_bmp(data) {
        Ok(header) => decode_pixels(data, &header),
        Err(e) => {
            log::warn!("not a valid image: {e}");
            PixelGrid::empty()
        }
    }
}

/// Read and decode a BMP file.
///
/// A file that cannot be read is an error; a file that is read but is not a
/// valid image yields `Ok` with an empty grid.
pub fn read_image(path: impl AsRef<Path>) -> Result<PixelGrid, DecodeError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(decode_bmp(&data))
}

/// Walk the pixel array of an already validated bitmap.
fn decode_pixels(data: &[u8], header: &BitmapHeader) -> PixelGrid {
    let width = header.width as usize;
    let height = header.height as usize;
    let stride = header.bytes_per_pixel() as usize;
    let padding = header.padding() as usize;
    if width == 0 || height == 0 {
        return PixelGrid::empty();
    }

    let mut pixels = vec![Pixel::default(); width * height];
    let mut pos = header.pixel_offset as usize;

    // First scanline in the file is the bottom row of the image
    for row in (0..height).rev() {
        let out_row = &mut pixels[row * width..(row + 1) * width];
        for out in out_row.iter_mut() {
            // Blue, green, red; a fourth byte in 32-bit data is skipped
            *out = Pixel::new(data[pos + 2], data[pos + 1], data[pos]);
            pos += stride;
        }
        pos += padding;
    }

    // Dimensions already validated against the buffer length
    PixelGrid::from_pixels(header.width, header.height, pixels).unwrap_or_default()
}

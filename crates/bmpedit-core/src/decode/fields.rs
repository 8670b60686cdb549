//! Little-endian header field extraction.

/// Read `width` bytes starting at `offset` as a little-endian unsigned integer.
///
/// Returns `None` if any byte of the field lies past the end of `source`,
/// so a short file surfaces as a failed header read rather than a bogus value.
/// `width` may be at most 8.
///
/// # Example
/// ```
/// use bmpedit_core::decode::read_uint;
///
/// let bytes = [0x42, 0x4D, 0x46, 0x00, 0x00, 0x00];
/// assert_eq!(read_uint(&bytes, 2, 4), Some(70));
/// assert_eq!(read_uint(&bytes, 4, 4), None);
/// ```
pub fn read_uint(source: &[u8], offset: usize, width: usize) -> Option<u64> {
    debug_assert!(width <= 8, "field width {width} exceeds 8 bytes");
    let end = offset.checked_add(width)?;
    let field = source.get(offset..end)?;
    Some(
        field
            .iter()
            .rev()
            .fold(0u64, |acc, &byte| (acc << 8) | byte as u64),
    )
}

/// Read a 4-byte little-endian field.
#[inline]
pub(crate) fn read_u32(source: &[u8], offset: usize) -> Option<u32> {
    read_uint(source, offset, 4).map(|v| v as u32)
}

/// Read a 2-byte little-endian field.
#[inline]
pub(crate) fn read_u16(source: &[u8], offset: usize) -> Option<u16> {
    read_uint(source, offset, 2).map(|v| v as u16)
}

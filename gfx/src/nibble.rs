//! 4bpp pixel packing.
//!
//! Two pixels share each byte. The pixel with the *even* X coordinate lives in
//! the high nibble and the odd one in the low nibble. Downstream hardware
//! scans bytes high nibble first, so this ordering is load-bearing: swapping
//! it mirrors every pixel pair on the glass.

/// Number of pixels packed into each byte.
pub const PIXELS_PER_BYTE: usize = 2;

/// Largest value a nibble can hold; also the mask applied to incoming values.
pub const MAX: u8 = 0x0F;

/// Bit position of pixel `x`'s nibble within its byte: 4 for even `x`, 0 for
/// odd.
#[inline]
pub fn shift(x: usize) -> u32 {
    4 * ((x as u32 % 2) ^ 1)
}

/// Mask selecting the nibble in pixel `x`'s byte that belongs to the *other*
/// pixel, i.e. the bits that must survive a write to `x`.
#[inline]
pub fn keep_mask(x: usize) -> u8 {
    MAX << (4 * (x % 2))
}

/// Index of the byte holding pixel `(x, y)` in a packed buffer of rows that
/// are `width` pixels wide.
#[inline]
pub fn byte_index(x: usize, y: usize, width: usize) -> usize {
    x / PIXELS_PER_BYTE + (y * width) / PIXELS_PER_BYTE
}

/// Extracts pixel `x`'s value from its packed byte.
#[inline]
pub fn get(byte: u8, x: usize) -> u8 {
    (byte >> shift(x)) & MAX
}

/// Returns `byte` with pixel `x`'s nibble replaced by `value`.
///
/// `value` is masked to 4 bits first, so an out-of-range value can't leak into
/// the neighboring pixel.
#[inline]
pub fn put(byte: u8, x: usize, value: u8) -> u8 {
    (byte & keep_mask(x)) | ((value & MAX) << shift(x))
}

/// Returns `byte` with pixel `x`'s nibble bitwise inverted.
#[inline]
pub fn invert(byte: u8, x: usize) -> u8 {
    byte ^ (MAX << shift(x))
}

/// Shifts a packed scanline one pixel to the left. The leftmost pixel falls
/// off and a zero pixel enters on the right.
pub fn shift_left(row: &mut [u8]) {
    let len = row.len();
    for i in 0..len {
        // row[i + 1] hasn't been touched yet, so this reads the old value.
        let carry = if i + 1 < len { row[i + 1] >> 4 } else { 0 };
        row[i] = (row[i] << 4) | carry;
    }
}

/// Shifts a packed scanline one pixel to the right. The rightmost pixel falls
/// off and a zero pixel enters on the left.
pub fn shift_right(row: &mut [u8]) {
    for i in (0..row.len()).rev() {
        let carry = if i > 0 { (row[i - 1] & MAX) << 4 } else { 0 };
        row[i] = (row[i] >> 4) | carry;
    }
}

//! Access to MSB-first 1bpp data.
//!
//! Two layouts show up in practice:
//!
//! - Bitmaps are row-major. Pixel `(i, j)` of a `width`-pixel-wide bitmap is
//!   bit `7 - i % 8` of byte `i / 8 + (j * width) / 8`.
//! - Font glyphs are column-major, one byte per column, with the most
//!   significant bit at the top of the cell.

/// Offset of the byte holding pixel `(i, j)` in a row-major bitmap.
///
/// Note that the row term is `(j * width) / 8`, not `j * (width / 8)`. The two
/// agree when `width` is a multiple of 8, which is the only case bitmap assets
/// are generated for.
#[inline]
pub fn bitmap_offset(i: usize, j: usize, width: usize) -> usize {
    i / 8 + (j * width) / 8
}

/// Minimum number of bytes a `width` x `height` bitmap must hold for every
/// pixel's byte to exist.
pub fn bitmap_len(width: usize, height: usize) -> usize {
    if width == 0 || height == 0 {
        0
    } else {
        bitmap_offset(width - 1, height - 1, width) + 1
    }
}

/// Reads pixel `(i, j)` of a row-major bitmap. Pixels whose byte lies past
/// the end of `data` read as clear.
#[inline]
pub fn bitmap_bit(data: &[u8], width: usize, i: usize, j: usize) -> bool {
    data.get(bitmap_offset(i, j, width))
        .map_or(false, |byte| byte & (1 << (7 - i % 8)) != 0)
}

/// Reads row `row` of a glyph column that is `height` rows tall.
///
/// Rows at or beyond `height` (or beyond 8) read as clear.
#[inline]
pub fn column_bit(column: u8, row: usize, height: usize) -> bool {
    if row >= height || height > 8 {
        return false;
    }
    column & (1 << (height - 1 - row)) != 0
}

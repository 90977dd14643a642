//! The in-memory picture.
//!
//! To fit in the 4 kiB of SRAM the original hardware had to spare, pixels are
//! stored at 4 bits each, two to a byte, rows top to bottom. Pixel `(0, 0)` is
//! the top-left corner of the panel. See `gfx::nibble` for the packing rules.
//!
//! All pixel accessors take signed coordinates and silently ignore points off
//! the panel, so callers can draw shapes that hang off the edges without
//! clipping them first.

use gfx::nibble;

use crate::error::LengthError;
use crate::{Color, BUF_SIZE, HEIGHT, ROW_BYTES, WIDTH};

/// Packed 4bpp framebuffer covering the whole panel.
#[derive(Clone, Eq, PartialEq)]
pub struct Framebuffer {
    bytes: [u8; BUF_SIZE],
}

/// Converts a signed point into a byte offset and unsigned X, or `None` if the
/// point is off the panel.
#[inline]
fn locate(x: i32, y: i32) -> Option<(usize, usize)> {
    if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    Some((nibble::byte_index(x, y, WIDTH), x))
}

impl Framebuffer {
    /// Creates an all-black framebuffer.
    pub const fn new() -> Self {
        Framebuffer {
            bytes: [0; BUF_SIZE],
        }
    }

    /// Wraps existing packed contents.
    pub const fn from_bytes(bytes: [u8; BUF_SIZE]) -> Self {
        Framebuffer { bytes }
    }

    /// Sets every pixel to color 0.
    pub fn clear(&mut self) {
        for b in self.bytes.iter_mut() {
            *b = 0;
        }
    }

    /// Paints the pixel at `(x, y)`. Only the low 4 bits of `color` are used.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((i, x)) = locate(x, y) {
            self.bytes[i] = nibble::put(self.bytes[i], x, color);
        }
    }

    /// Sets the pixel at `(x, y)` to color 0.
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        if let Some((i, x)) = locate(x, y) {
            self.bytes[i] &= nibble::keep_mask(x);
        }
    }

    /// Flips all four bits of the pixel at `(x, y)`.
    pub fn invert_pixel(&mut self, x: i32, y: i32) {
        if let Some((i, x)) = locate(x, y) {
            self.bytes[i] = nibble::invert(self.bytes[i], x);
        }
    }

    /// Reads the pixel at `(x, y)`, or `None` off the panel.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        locate(x, y).map(|(i, x)| nibble::get(self.bytes[i], x))
    }

    /// Packed contents, `BUF_SIZE` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Replaces the packed contents wholesale.
    ///
    /// `bytes` must be exactly `BUF_SIZE` long. Anything else is rejected and
    /// the framebuffer is left as it was; there is no truncation or padding.
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<(), LengthError> {
        if bytes.len() != BUF_SIZE {
            return Err(LengthError {
                expected: BUF_SIZE,
                actual: bytes.len(),
            });
        }
        self.bytes.copy_from_slice(bytes);
        Ok(())
    }

    /// Packed scanlines, top to bottom, `ROW_BYTES` each.
    pub fn rows_mut(&mut self) -> core::slice::ChunksExactMut<'_, u8> {
        self.bytes.chunks_exact_mut(ROW_BYTES)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Framebuffer::new()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // 3 kiB of hex is never what anyone wants in a panic message.
        let lit = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Framebuffer")
            .field("nonzero_bytes", &lit)
            .finish()
    }
}

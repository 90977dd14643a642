//! Blitting packed 1bpp bitmaps into the 4bpp framebuffer.

use core::convert::TryFrom;

use gfx::bit;

use crate::error::LengthError;
use crate::framebuffer::Framebuffer;
use crate::Color;

/// A borrowed monochrome image: row-major, MSB-first, `width / 8` bytes per
/// row.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Bitmap<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Wraps `data` as a `width` x `height` image, checking that every pixel's
    /// byte is present.
    pub fn new(
        width: usize,
        height: usize,
        data: &'a [u8],
    ) -> Result<Self, LengthError> {
        let expected = bit::bitmap_len(width, height);
        if data.len() < expected {
            return Err(LengthError {
                expected,
                actual: data.len(),
            });
        }
        Ok(Bitmap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether pixel `(i, j)` of the image is set.
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        bit::bitmap_bit(self.data, self.width, i, j)
    }
}

impl Framebuffer {
    /// Copies `bmp` with its top-left at `(x, y)`. Set bits become `color`;
    /// clear bits become black. The covered area is always overwritten, unlike
    /// text, which only ever adds pixels.
    pub fn draw_bitmap(&mut self, x: i32, y: i32, bmp: &Bitmap<'_>, color: Color) {
        for i in 0..bmp.width {
            let dx = match offset(x, i) {
                Some(dx) => dx,
                None => continue,
            };
            for j in 0..bmp.height {
                let dy = match offset(y, j) {
                    Some(dy) => dy,
                    None => continue,
                };
                if bmp.is_set(i, j) {
                    self.set_pixel(dx, dy, color);
                } else {
                    self.clear_pixel(dx, dy);
                }
            }
        }
    }
}

/// `base + delta`, or `None` if that isn't an `i32` (and so can't be on the
/// panel).
fn offset(base: i32, delta: usize) -> Option<i32> {
    i32::try_from(delta).ok()?.checked_add(base)
}

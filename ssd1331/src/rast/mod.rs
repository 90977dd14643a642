//! Drawing primitives over the packed framebuffer.
//!
//! Rectangles are inclusive on all four sides. Region operations clip their
//! coordinates to the panel *before* iterating, so arbitrarily large or
//! negative rectangles cost no more than a full-screen one.

pub mod bitmap_1;
pub mod text;

use core::ops::RangeInclusive;

use crate::framebuffer::Framebuffer;
use crate::palette::WHITE;
use crate::{Color, HEIGHT, WIDTH};

/// Clamps an inclusive span to `0..limit`. The result may be empty.
fn clip(lo: i32, hi: i32, limit: usize) -> RangeInclusive<i32> {
    lo.max(0)..=hi.min(limit as i32 - 1)
}

impl Framebuffer {
    /// Draws a full-width white line across row `y`.
    pub fn hline(&mut self, y: i32) {
        if y < 0 || y >= HEIGHT as i32 {
            return;
        }
        for x in 0..WIDTH as i32 {
            self.set_pixel(x, y, WHITE);
        }
    }

    /// Fills the box `(x1, y1)`-`(x2, y2)` with `color` if `set`, or clears
    /// it to black otherwise.
    pub fn fill_rect(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        set: bool,
        color: Color,
    ) {
        let rows = clip(y1, y2, HEIGHT);
        for x in clip(x1, x2, WIDTH) {
            for y in rows.clone() {
                if set {
                    self.set_pixel(x, y, color);
                } else {
                    self.clear_pixel(x, y);
                }
            }
        }
    }

    /// Inverts every pixel in the box `(x1, y1)`-`(x2, y2)`.
    pub fn invert_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let rows = clip(y1, y2, HEIGHT);
        for x in clip(x1, x2, WIDTH) {
            for y in rows.clone() {
                self.invert_pixel(x, y);
            }
        }
    }

    /// Draws the white outline of the box `(x1, y1)`-`(x2, y2)`: the top and
    /// bottom rows in full, and the left and right columns between them.
    ///
    /// Edges keep their position when they lie off the panel; they just
    /// don't show. Only the spans walked along each edge are clipped.
    pub fn frame(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        for x in clip(x1, x2, WIDTH) {
            self.set_pixel(x, y1, WHITE);
            self.set_pixel(x, y2, WHITE);
        }
        // Strictly between the rows, which is empty for frames less than
        // three pixels tall.
        for y in clip(y1.saturating_add(1), y2.saturating_sub(1), HEIGHT) {
            self.set_pixel(x1, y, WHITE);
            self.set_pixel(x2, y, WHITE);
        }
    }
}

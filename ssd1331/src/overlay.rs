//! Debug-link indicator: a small triangle in the top-right corner.
//!
//! The marker is drawn by inverting pixels, so applying it twice restores the
//! framebuffer. `Display::refresh` applies it just before streaming and again
//! just after; it never persists in the framebuffer.

use crate::framebuffer::Framebuffer;
use crate::WIDTH;

/// Rows of the triangle, top down. Each row runs from `WIDTH - len` to the
/// right edge.
static ROW_LENGTHS: [i32; 5] = [5, 4, 3, 2, 1];

/// Every pixel the marker covers.
pub fn pixels() -> impl Iterator<Item = (i32, i32)> {
    ROW_LENGTHS.iter().enumerate().flat_map(|(y, &len)| {
        (WIDTH as i32 - len..WIDTH as i32).map(move |x| (x, y as i32))
    })
}

/// Inverts the marker into (or back out of) `fb`.
pub fn toggle(fb: &mut Framebuffer) {
    for (x, y) in pixels() {
        fb.invert_pixel(x, y);
    }
}

//! Proportional text on top of an external glyph source.
//!
//! Text arrives as bytes. Anything beyond ASCII is folded on the way in: UTF-8
//! continuation bytes vanish and each lead byte becomes a single `_`, so one
//! multi-byte character renders as one underscore regardless of its length.
//! This is deliberately lossy and matches what existing screens look like;
//! real decoding would need glyphs the fonts don't have.

use gfx::bit;

use crate::framebuffer::Framebuffer;
use crate::palette::WHITE;
use crate::{Color, HEIGHT, WIDTH};

/// Height of every glyph cell, in unzoomed pixels.
pub const FONT_HEIGHT: i32 = 8;

/// Character substituted for the lead byte of a multi-byte UTF-8 sequence.
pub const PLACEHOLDER: char = '_';

/// Source of glyph geometry and pixels.
///
/// Glyph data is column-major, one byte per column, most significant bit at
/// the top, `FONT_HEIGHT` rows. Implementations must be pure: the same
/// arguments always yield the same answer.
pub trait Glyphs {
    /// Width of `ch` in `font`, in unzoomed pixels.
    fn char_width(&self, font: u8, ch: char) -> i32;

    /// Column data for `ch` in `font`. Should hold `char_width` bytes; extra
    /// bytes are ignored and missing ones draw as blank columns.
    fn char_data(&self, font: u8, ch: char) -> &[u8];
}

/// Font selector: a font id plus a double-size flag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct FontSpec {
    pub id: u8,
    pub double: bool,
}

impl FontSpec {
    /// Bit set in the packed selector to request double-size rendering.
    pub const DOUBLE: u8 = 0x80;

    pub const fn new(id: u8) -> Self {
        FontSpec { id, double: false }
    }

    /// The same font at twice the size.
    pub const fn doubled(self) -> Self {
        FontSpec {
            double: true,
            ..self
        }
    }

    /// Decodes the packed form: id in bits 0-6, `DOUBLE` in bit 7.
    pub const fn from_bits(bits: u8) -> Self {
        FontSpec {
            id: bits & !Self::DOUBLE,
            double: bits & Self::DOUBLE != 0,
        }
    }

    pub const fn bits(self) -> u8 {
        (self.id & !Self::DOUBLE) | if self.double { Self::DOUBLE } else { 0 }
    }

    /// Pixel magnification: 2 when doubled, else 1.
    pub const fn zoom(self) -> i32 {
        if self.double {
            2
        } else {
            1
        }
    }
}

/// Folds one byte of (possibly UTF-8) text to something the fonts can draw.
///
/// Returns `None` for bytes that should produce nothing at all.
pub fn normalize_char(byte: u8) -> Option<char> {
    match byte {
        0x00..=0x7F => Some(byte as char),
        // 10xxxxxx: continuation of a sequence we already replaced.
        0x80..=0xBF => None,
        // 11xxxxxx: start of a multi-byte sequence.
        _ => Some(PLACEHOLDER),
    }
}

/// Horizontal distance the cursor moves after drawing `ch`: the glyph plus one
/// column of spacing, scaled.
fn advance(glyphs: &impl Glyphs, font: FontSpec, ch: char) -> i32 {
    font.zoom() * (glyphs.char_width(font.id, ch) + 1)
}

/// Width in pixels `text` occupies when drawn in `font`, including trailing
/// spacing.
pub fn string_width(glyphs: &impl Glyphs, text: &[u8], font: FontSpec) -> i32 {
    text.iter()
        .filter_map(|&b| normalize_char(b))
        .map(|ch| advance(glyphs, font, ch))
        .fold(0, i32::saturating_add)
}

impl Framebuffer {
    /// Draws a single character with its cell's top-left at `(x, y)`.
    ///
    /// Only set glyph bits are painted; the cell background is left alone.
    pub fn draw_char(
        &mut self,
        glyphs: &impl Glyphs,
        x: i32,
        y: i32,
        ch: char,
        font: FontSpec,
        color: Color,
    ) {
        let zoom = font.zoom();
        if x >= WIDTH as i32 || y >= HEIGHT as i32 || y <= -FONT_HEIGHT * zoom {
            return;
        }

        let char_width = glyphs.char_width(font.id, ch);
        if x.saturating_add(char_width.saturating_mul(zoom)) <= 0 {
            return;
        }

        let data = glyphs.char_data(font.id, ch);
        for (xo, &column) in data.iter().take(char_width.max(0) as usize).enumerate() {
            let xo = xo as i32;
            for yo in 0..FONT_HEIGHT {
                if !bit::column_bit(column, yo as usize, FONT_HEIGHT as usize) {
                    continue;
                }
                if zoom <= 1 {
                    self.set_pixel(x + xo, y + yo, color);
                } else {
                    self.fill_rect(
                        x + xo * zoom,
                        y + yo * zoom,
                        x + (xo + 1) * zoom - 1,
                        y + (yo + 1) * zoom - 1,
                        true,
                        color,
                    );
                }
            }
        }
    }

    /// Draws `text` left to right starting at `(x, y)`.
    pub fn draw_string(
        &mut self,
        glyphs: &impl Glyphs,
        x: i32,
        y: i32,
        text: &[u8],
        font: FontSpec,
        color: Color,
    ) {
        let mut cursor = x;
        for ch in text.iter().filter_map(|&b| normalize_char(b)) {
            self.draw_char(glyphs, cursor, y, ch, font, color);
            cursor = cursor.saturating_add(advance(glyphs, font, ch));
        }
    }

    /// Draws `text` in white, horizontally centered on the panel.
    pub fn draw_string_centered(
        &mut self,
        glyphs: &impl Glyphs,
        y: i32,
        text: &[u8],
        font: FontSpec,
    ) {
        let width = string_width(glyphs, text, font);
        let x = (WIDTH as i32).saturating_sub(width) / 2;
        self.draw_string(glyphs, x, y, text, font, WHITE);
    }

    /// Draws `text` in white so that it ends (including trailing spacing) at
    /// `x`.
    pub fn draw_string_right(
        &mut self,
        glyphs: &impl Glyphs,
        x: i32,
        y: i32,
        text: &[u8],
        font: FontSpec,
    ) {
        let x = x.saturating_sub(string_width(glyphs, text, font));
        self.draw_string(glyphs, x, y, text, font, WHITE);
    }
}

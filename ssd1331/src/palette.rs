//! Color lookup table from 4-bit framebuffer indices to panel colors.

use crate::Color;

/// Native panel color, RGB565.
pub type Rgb565 = u16;

pub const NATIVE_BLACK: Rgb565 = 0x0000;
pub const NATIVE_BLUE: Rgb565 = 0x001F;
pub const NATIVE_RED: Rgb565 = 0xF800;
pub const NATIVE_GREEN: Rgb565 = 0x07E0;
pub const NATIVE_CYAN: Rgb565 = 0x07FF;
pub const NATIVE_MAGENTA: Rgb565 = 0xF81F;
pub const NATIVE_YELLOW: Rgb565 = 0xFFE0;
pub const NATIVE_WHITE: Rgb565 = 0xFFFF;

// Framebuffer color indices, as used by the default palette.
pub const BLACK: Color = 0x00;
pub const YELLOW: Color = 0x01;
pub const RED: Color = 0x02;
pub const BLUE: Color = 0x03;
/// Historically named; the default table maps this slot to magenta.
pub const GREEN: Color = 0x04;
pub const WHITE: Color = 0x0F;

/// Number of entries; one per nibble value.
pub const ENTRIES: usize = 16;

/// Sixteen-entry CLUT. Fixed once a `Display` is constructed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Palette([Rgb565; ENTRIES]);

impl Palette {
    /// The stock table. Slots 5 through 14 are reserved and map to black.
    pub const DEFAULT: Palette = Palette([
        NATIVE_BLACK,
        NATIVE_YELLOW,
        NATIVE_RED,
        NATIVE_BLUE,
        NATIVE_MAGENTA,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_BLACK,
        NATIVE_WHITE,
    ]);

    pub const fn new(colors: [Rgb565; ENTRIES]) -> Self {
        Palette(colors)
    }

    /// Looks up `index`, ignoring any bits above the low nibble.
    #[inline]
    pub fn get(&self, index: Color) -> Rgb565 {
        self.0[usize::from(index & gfx::nibble::MAX)]
    }

    /// Expands one packed framebuffer byte into the four bytes the panel
    /// expects: the high-nibble pixel first, each color big-endian.
    #[inline]
    pub fn expand(&self, packed: u8) -> [u8; 4] {
        let [a, b] = self.get(packed >> 4).to_be_bytes();
        let [c, d] = self.get(packed).to_be_bytes();
        [a, b, c, d]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let p = Palette::default();
        assert_eq!(p.get(BLACK), NATIVE_BLACK);
        assert_eq!(p.get(YELLOW), NATIVE_YELLOW);
        assert_eq!(p.get(RED), NATIVE_RED);
        assert_eq!(p.get(BLUE), NATIVE_BLUE);
        assert_eq!(p.get(GREEN), NATIVE_MAGENTA);
        assert_eq!(p.get(WHITE), NATIVE_WHITE);
        for reserved in 5..15 {
            assert_eq!(p.get(reserved), NATIVE_BLACK);
        }
    }

    #[test]
    fn get_masks_index() {
        let p = Palette::default();
        assert_eq!(p.get(0x1F), NATIVE_WHITE);
        assert_eq!(p.get(0xF1), NATIVE_YELLOW);
    }

    #[test]
    fn expand_is_high_nibble_first_big_endian() {
        let p = Palette::default();
        assert_eq!(p.expand(0xF2), [0xFF, 0xFF, 0xF8, 0x00]);
        assert_eq!(p.expand(0x31), [0x00, 0x1F, 0xFF, 0xE0]);
        assert_eq!(p.expand(0x00), [0; 4]);
    }
}

//! Driver for 96x64 SSD1331 color OLED panels with a 16-color packed
//! framebuffer.
//!
//! Pictures are built in a `Framebuffer` at 4 bits per pixel and pushed to the
//! panel in one piece by `Display::refresh`, expanded through a 16-entry
//! `Palette` on the way out. Everything except `util::stm32` is independent of
//! the target so it can be tested on the host.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod overlay;
pub mod palette;
pub mod rast;
pub mod swipe;
pub mod transport;
pub mod util;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use display::Display;
pub use error::{Error, LengthError};
pub use framebuffer::Framebuffer;
pub use palette::Palette;
pub use rast::bitmap_1::Bitmap;
pub use rast::text::{FontSpec, Glyphs};
pub use swipe::{Direction, Swipe};
pub use transport::{Mode, SpiTransport, Transport};

/// Representation of a pixel in the framebuffer: a palette index. Only the
/// low 4 bits are significant; anything above is masked off when stored.
pub type Color = u8;

/// Visible pixels per scanline.
pub const WIDTH: usize = 96;

/// Visible scanlines.
pub const HEIGHT: usize = 64;

/// Bytes per packed scanline.
pub const ROW_BYTES: usize = WIDTH / gfx::nibble::PIXELS_PER_BYTE;

/// Size of the packed framebuffer in bytes.
pub const BUF_SIZE: usize = ROW_BYTES * HEIGHT;

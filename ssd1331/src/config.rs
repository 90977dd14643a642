//! Driver settings fixed at construction.

use smart_default::SmartDefault;

use crate::palette::Palette;

#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Color table used to expand the framebuffer during refresh.
    pub palette: Palette,
    /// Pause after each swipe frame, in microseconds.
    #[default(20_000)]
    pub frame_delay_us: u32,
    /// Initial state of the debug-link marker.
    pub debug_link: bool,
}

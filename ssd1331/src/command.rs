//! Fixed SSD1331 command streams.
//!
//! These are sent verbatim in command mode. Their values come from the panel
//! vendor's bring-up recipe; there's nothing to compute here.

/// Issued once after reset, before the first refresh.
pub const INIT: [u8; 46] = [
    0xFD, 0x12, // unlock
    0xAE, // display off
    0x15, 0x00, 0x5F, // column address 0..=95
    0x75, 0x00, 0x3F, // row address 0..=63
    0x81, 0x80, // contrast A
    0x82, 0x60, // contrast B
    0x83, 0x80, // contrast C
    0x87, 0x08, // master current, about half
    0x8A, 0x80, // precharge A
    0x8B, 0x60, // precharge B
    0x8C, 0x80, // precharge C
    0xA0, 0x60, // remap: no odd/even line interleave
    0xA1, 0x00, // start row
    0xA2, 0x00, // vertical offset
    0xA4, // normal display mode
    0xA8, 0x3F, // multiplex ratio
    0xAB, 0x8E, // external supply
    0xB0, 0x0B, // power save off
    0xB1, 0x74, // precharge phases
    0xB3, 0xD0, // clock divider
    0xB9, // default grayscale table
    0xBB, 0x3E, // precharge level
    0xBE, 0x3E, // VCOMH
    0xAF, // display on
];

/// Resets the write window to the full panel. Sent before every refresh.
pub const WINDOW: [u8; 10] = [
    0x15, 0x00, 0x5F, // column address 0..=95
    0x75, 0x00, 0x3F, // row address 0..=63
    0xA1, 0x00, // start row
    0xA2, 0x00, // vertical offset
];

/// How long reset is held high before the pulse, in microseconds.
pub const RESET_SETUP_US: u32 = 40;
/// Width of the active-low reset pulse, in microseconds.
pub const RESET_PULSE_US: u32 = 400;

//! Draws a test card and wipes it off the panel, alternating directions.

#![no_std]
#![no_main]

#[cfg(feature = "panic-halt")]
extern crate panic_halt;
#[cfg(feature = "panic-itm")]
extern crate panic_itm;

use stm32f4::stm32f407 as device;

use ssd1331::palette::{BLUE, RED, YELLOW};
use ssd1331::util::stm32::{CycleDelay, Spi1Transport};
use ssd1331::{Bitmap, Config, Direction, Display};

/// Core clock out of reset (HSI).
const CPU_HZ: u32 = 16_000_000;

/// 16x16 smiley, two bytes per row.
static FACE: [u8; 32] = [
    0x07, 0xE0, 0x18, 0x18, 0x20, 0x04, 0x40, 0x02, //
    0x4C, 0x32, 0x8C, 0x31, 0x80, 0x01, 0x80, 0x01, //
    0x80, 0x01, 0x88, 0x11, 0x44, 0x22, 0x43, 0xC2, //
    0x20, 0x04, 0x18, 0x18, 0x07, 0xE0, 0x00, 0x00, //
];

/// Demo entry point.
#[cortex_m_rt::entry]
fn main() -> ! {
    let p = device::Peripherals::take().unwrap();
    let transport = Spi1Transport::new(&p.RCC, p.GPIOA, p.GPIOB, p.SPI1);
    let mut display =
        Display::new(transport, CycleDelay::new(CPU_HZ), Config::default());
    display.init().unwrap();

    let face = Bitmap::new(16, 16, &FACE).unwrap();
    let mut direction = Direction::Left;

    loop {
        let fb = display.framebuffer_mut();
        fb.frame(0, 0, 95, 63);
        fb.hline(44);
        fb.fill_rect(4, 4, 27, 39, true, RED);
        fb.fill_rect(30, 4, 53, 39, true, BLUE);
        fb.invert_rect(20, 20, 37, 27);
        fb.draw_bitmap(68, 14, &face, YELLOW);
        fb.fill_rect(4, 48, 91, 59, true, YELLOW);

        // Toggle the corner marker each round so both states get exercised.
        let marked = display.debug_link();
        display.set_debug_link(!marked).unwrap();

        display.swipe(direction).unwrap();
        direction = match direction {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        };
    }
}

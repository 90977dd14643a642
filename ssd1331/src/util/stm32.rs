//! Bare-metal glue for the STM32F407.
//!
//! Wiring: SPI1 with SCK on PA5 and MOSI on PA7, chip select on PA4, D/C on
//! PB0, reset on PB1. This goes straight at the `stm32f4` registers.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use stm32f4::stm32f407 as device;

use crate::command;
use crate::transport::{Mode, Transport};

macro_rules! block_while {
    ($condition:expr) => {
        while $condition {}
    };
}

macro_rules! block_until {
    ($condition:expr) => {
        block_while!(!$condition)
    };
}

/// `Transport` on SPI1, polled.
pub struct Spi1Transport {
    gpioa: device::GPIOA,
    gpiob: device::GPIOB,
    spi: device::SPI1,
}

impl Spi1Transport {
    /// Powers up and configures the pins and SPI1, taking ownership of them.
    ///
    /// SPI1 runs off APB2 divided by 8, mode 0, MSB first.
    pub fn new(
        rcc: &device::RCC,
        gpioa: device::GPIOA,
        gpiob: device::GPIOB,
        spi: device::SPI1,
    ) -> Self {
        rcc.ahb1enr
            .modify(|_, w| w.gpioaen().enabled().gpioben().enabled());
        rcc.apb2enr.modify(|_, w| w.spi1en().enabled());

        // Idle levels before the pins become outputs: deselected, command
        // mode, out of reset.
        gpioa.bsrr.write(|w| w.bs4().set_bit());
        gpiob.bsrr.write(|w| w.br0().set_bit().bs1().set_bit());

        gpioa.ospeedr.modify(|_, w| {
            w.ospeedr5().very_high_speed().ospeedr7().very_high_speed()
        });
        // Safety: AF5 is SPI1 on these pins; any 4-bit value is a valid AF.
        gpioa.afrl.modify(|_, w| unsafe { w.afrl5().bits(5).afrl7().bits(5) });
        gpioa.moder.modify(|_, w| {
            w.moder4().output().moder5().alternate().moder7().alternate()
        });
        gpiob
            .moder
            .modify(|_, w| w.moder0().output().moder1().output());

        spi.cr1.write(|w| {
            // Safety: 0b010 is fPCLK/8.
            unsafe {
                w.br().bits(0b010);
            }
            w.mstr().set_bit().ssm().set_bit().ssi().set_bit()
        });
        spi.cr1.modify(|_, w| w.spe().set_bit());

        Spi1Transport { gpioa, gpiob, spi }
    }

    /// Gives the peripherals back, leaving them configured.
    pub fn release(self) -> (device::GPIOA, device::GPIOB, device::SPI1) {
        (self.gpioa, self.gpiob, self.spi)
    }
}

impl Transport for Spi1Transport {
    type Error = Infallible;

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Infallible> {
        self.set_mode(Mode::Command)?;
        self.deselect()?;

        self.gpiob.bsrr.write(|w| w.bs1().set_bit());
        delay.delay_us(command::RESET_SETUP_US);
        self.gpiob.bsrr.write(|w| w.br1().set_bit());
        delay.delay_us(command::RESET_PULSE_US);
        self.gpiob.bsrr.write(|w| w.bs1().set_bit());
        Ok(())
    }

    fn select(&mut self) -> Result<(), Infallible> {
        self.gpioa.bsrr.write(|w| w.br4().set_bit());
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Infallible> {
        self.gpioa.bsrr.write(|w| w.bs4().set_bit());
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), Infallible> {
        match mode {
            Mode::Command => self.gpiob.bsrr.write(|w| w.br0().set_bit()),
            Mode::Data => self.gpiob.bsrr.write(|w| w.bs0().set_bit()),
        }
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        for &b in bytes {
            block_until! { self.spi.sr.read().txe().bit() }
            // Safety: the data register accepts any value.
            self.spi.dr.write(|w| unsafe { w.dr().bits(u16::from(b)) });
        }
        // Don't let the caller move chip select until the last bit is out.
        block_until! { self.spi.sr.read().txe().bit() }
        block_while! { self.spi.sr.read().bsy().bit() }
        Ok(())
    }
}

/// Busy-wait delay calibrated to the core clock.
pub struct CycleDelay {
    cpu_hz: u32,
}

impl CycleDelay {
    pub fn new(cpu_hz: u32) -> Self {
        CycleDelay { cpu_hz }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = u64::from(ns) * u64::from(self.cpu_hz) / 1_000_000_000;
        // Fits in u32 for any clock below 4 GHz.
        cortex_m::asm::delay(cycles as u32);
    }
}

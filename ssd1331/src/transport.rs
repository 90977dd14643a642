//! The wire between the driver and the panel.
//!
//! The driver only ever pushes bytes: commands in command mode, pixels in data
//! mode, bracketed by chip select. `Transport` captures exactly that, so the
//! same driver runs against real SPI, the bare-metal STM32 peripheral in
//! `util::stm32`, or a recording mock in tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use crate::command;

/// Meaning of the bytes that follow, selected by the panel's D/C line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Command,
    Data,
}

/// A one-way byte sink to the panel.
///
/// Implementations block until each call's bytes are out on the wire; any
/// hardware failure comes back as `Self::Error` and is handed to the caller
/// unchanged.
pub trait Transport {
    type Error;

    /// Pulses the panel's reset line, leaving it deselected and in command
    /// mode.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Asserts chip select.
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Releases chip select.
    fn deselect(&mut self) -> Result<(), Self::Error>;

    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error>;

    /// Sends `bytes` and waits for the last one to leave.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Failure of one of the `embedded-hal` parts behind `SpiTransport`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpiTransportError {
    Spi(spi::ErrorKind),
    Pin(digital::ErrorKind),
}

fn pin_err<E: digital::Error>(e: E) -> SpiTransportError {
    SpiTransportError::Pin(e.kind())
}

/// `Transport` over an `embedded-hal` SPI bus and three GPIOs.
///
/// Chip select and reset are active low; D/C is low for commands.
pub struct SpiTransport<SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
}

impl<SPI, DC, CS, RST> SpiTransport<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        SpiTransport { spi, dc, cs, rst }
    }

    /// Gives back the bus and pins.
    pub fn release(self) -> (SPI, DC, CS, RST) {
        (self.spi, self.dc, self.cs, self.rst)
    }
}

impl<SPI, DC, CS, RST> Transport for SpiTransport<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    type Error = SpiTransportError;

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.set_mode(Mode::Command)?;
        self.deselect()?;

        self.rst.set_high().map_err(pin_err)?;
        delay.delay_us(command::RESET_SETUP_US);
        self.rst.set_low().map_err(pin_err)?;
        delay.delay_us(command::RESET_PULSE_US);
        self.rst.set_high().map_err(pin_err)
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(pin_err)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(pin_err)
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        match mode {
            Mode::Command => self.dc.set_low(),
            Mode::Data => self.dc.set_high(),
        }
        .map_err(pin_err)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        use embedded_hal::spi::Error as _;

        self.spi
            .write(bytes)
            .and_then(|_| self.spi.flush())
            .map_err(|e| SpiTransportError::Spi(e.kind()))
    }
}

//! Test doubles shared by the unit tests.

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::rast::text::Glyphs;
use crate::transport::{Mode, Transport};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Reset,
    Select,
    Deselect,
    Mode(Mode),
    Write(Vec<u8>),
}

/// Transport that records every call.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    /// Bytes written in command mode, one entry per select/deselect burst.
    pub fn command_bursts(&self) -> Vec<Vec<u8>> {
        self.collect(Mode::Command)
    }

    /// All bytes written in data mode, concatenated.
    pub fn data(&self) -> Vec<u8> {
        self.collect(Mode::Data).concat()
    }

    fn collect(&self, wanted: Mode) -> Vec<Vec<u8>> {
        let mut mode = Mode::Command;
        let mut bursts = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for e in &self.events {
            match e {
                Event::Mode(m) => mode = *m,
                Event::Select if mode == wanted => current = Some(Vec::new()),
                Event::Deselect => {
                    if let Some(burst) = current.take() {
                        bursts.push(burst);
                    }
                }
                Event::Write(bytes) => {
                    if let Some(burst) = current.as_mut() {
                        burst.extend_from_slice(bytes);
                    }
                }
                _ => (),
            }
        }
        bursts
    }
}

impl Transport for Recorder {
    type Error = ();

    fn reset<D: DelayNs>(&mut self, _: &mut D) -> Result<(), ()> {
        self.events.push(Event::Reset);
        Ok(())
    }

    fn select(&mut self) -> Result<(), ()> {
        self.events.push(Event::Select);
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), ()> {
        self.events.push(Event::Deselect);
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), ()> {
        self.events.push(Event::Mode(mode));
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), ()> {
        self.events.push(Event::Write(bytes.to_vec()));
        Ok(())
    }
}

/// Transport that accepts the given number of calls, then fails every one
/// after that.
pub struct FailAfter(pub usize);

impl FailAfter {
    fn tick(&mut self) -> Result<(), ()> {
        if self.0 == 0 {
            Err(())
        } else {
            self.0 -= 1;
            Ok(())
        }
    }
}

impl Transport for FailAfter {
    type Error = ();

    fn reset<D: DelayNs>(&mut self, _: &mut D) -> Result<(), ()> {
        self.tick()
    }

    fn select(&mut self) -> Result<(), ()> {
        self.tick()
    }

    fn deselect(&mut self) -> Result<(), ()> {
        self.tick()
    }

    fn set_mode(&mut self, _: Mode) -> Result<(), ()> {
        self.tick()
    }

    fn write(&mut self, _: &[u8]) -> Result<(), ()> {
        self.tick()
    }
}

/// Delay that returns immediately and keeps count.
#[derive(Default)]
pub struct NoDelay {
    total_ns: u64,
}

impl NoDelay {
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1000
    }
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Font whose glyphs are easy to reason about: digits are solid 3x8 blocks,
/// space is blank, everything else is a 5-wide hollow box.
pub struct BlockFont;

static DIGIT: [u8; 3] = [0xFF; 3];
static BLANK: [u8; 5] = [0x00; 5];
static BOX: [u8; 5] = [0xFF, 0x81, 0x81, 0x81, 0xFF];

impl Glyphs for BlockFont {
    fn char_width(&self, _: u8, ch: char) -> i32 {
        if ch.is_ascii_digit() {
            3
        } else {
            5
        }
    }

    fn char_data(&self, _: u8, ch: char) -> &[u8] {
        match ch {
            '0'..='9' => &DIGIT,
            ' ' => &BLANK,
            _ => &BOX,
        }
    }
}

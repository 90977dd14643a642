//! The driver proper: a framebuffer bound to a panel.

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::command;
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::overlay;
use crate::palette::Palette;
use crate::swipe::{Direction, Swipe};
use crate::transport::{Mode, Transport};

type Result<T, E> = core::result::Result<T, Error<E>>;

/// An SSD1331 panel and the picture destined for it.
///
/// Drawing happens on the `Framebuffer` (see `framebuffer_mut`) and is
/// invisible until `refresh` pushes the whole thing to the panel.
pub struct Display<T, D> {
    transport: T,
    delay: D,
    fb: Framebuffer,
    palette: Palette,
    frame_delay_us: u32,
    debug_link: bool,
}

impl<T, D> Display<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Wraps a transport. Nothing is sent until `init`.
    pub fn new(transport: T, delay: D, config: Config) -> Self {
        Display {
            transport,
            delay,
            fb: Framebuffer::new(),
            palette: config.palette,
            frame_delay_us: config.frame_delay_us,
            debug_link: config.debug_link,
        }
    }

    /// Resets and configures the panel, then blanks it.
    pub fn init(&mut self) -> Result<(), T::Error> {
        debug!("ssd1331: init");
        self.transport
            .reset(&mut self.delay)
            .map_err(Error::Transport)?;
        self.send_commands(&command::INIT)?;
        self.fb.clear();
        self.refresh()
    }

    /// Blanks the framebuffer. The panel is unaffected until `refresh`.
    pub fn clear(&mut self) {
        self.fb.clear();
    }

    /// Sends the complete framebuffer to the panel, with the debug-link
    /// marker overlaid if enabled.
    pub fn refresh(&mut self) -> Result<(), T::Error> {
        let Display {
            transport,
            fb,
            palette,
            debug_link,
            ..
        } = self;
        let marked = *debug_link;

        if marked {
            debug!("ssd1331: refresh with debug link marker");
            overlay::toggle(fb);
        }
        // Take the marker back out however we leave.
        let fb = scopeguard::guard(fb, |fb| {
            if marked {
                overlay::toggle(fb);
            }
        });

        let sent = stream(transport, palette, fb.as_bytes());
        sent.map_err(Error::Transport)
    }

    /// Shows or hides the debug-link marker, refreshing immediately.
    pub fn set_debug_link(&mut self, on: bool) -> Result<(), T::Error> {
        debug!("ssd1331: debug link {}", on);
        self.debug_link = on;
        self.refresh()
    }

    pub fn debug_link(&self) -> bool {
        self.debug_link
    }

    /// Packed framebuffer contents.
    pub fn buffer(&self) -> &[u8] {
        self.fb.as_bytes()
    }

    /// Replaces the framebuffer contents. `bytes` must be exactly
    /// `BUF_SIZE` long; otherwise nothing changes.
    pub fn set_buffer(&mut self, bytes: &[u8]) -> Result<(), T::Error> {
        self.fb.set_bytes(bytes).map_err(|e| {
            warn!("ssd1331: rejected framebuffer replacement: {}", e);
            Error::from(e)
        })
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.fb
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Slides the picture out to the left, one refresh per pixel. Leaves the
    /// framebuffer blank.
    pub fn swipe_left(&mut self) -> Result<(), T::Error> {
        self.swipe(Direction::Left)
    }

    /// Slides the picture out to the right, one refresh per pixel. Leaves the
    /// framebuffer blank.
    pub fn swipe_right(&mut self) -> Result<(), T::Error> {
        self.swipe(Direction::Right)
    }

    /// Runs a swipe to completion. Blocks for `WIDTH` frames.
    pub fn swipe(&mut self, direction: Direction) -> Result<(), T::Error> {
        debug!("ssd1331: swipe {:?}", direction);
        let mut swipe = Swipe::new(direction);
        while swipe.step(&mut self.fb) {
            self.refresh()?;
            self.delay.delay_us(self.frame_delay_us);
        }
        debug!("ssd1331: swipe done");
        Ok(())
    }

    /// Gives back the transport and delay.
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    fn send_commands(&mut self, bytes: &[u8]) -> Result<(), T::Error> {
        send_commands(&mut self.transport, bytes).map_err(Error::Transport)
    }
}

fn send_commands<T: Transport>(
    transport: &mut T,
    bytes: &[u8],
) -> core::result::Result<(), T::Error> {
    transport.set_mode(Mode::Command)?;
    transport.select()?;
    transport.write(bytes)?;
    transport.deselect()
}

/// Points the panel at its full window and streams `bytes`, expanded through
/// `palette`, as pixel data.
fn stream<T: Transport>(
    transport: &mut T,
    palette: &Palette,
    bytes: &[u8],
) -> core::result::Result<(), T::Error> {
    send_commands(transport, &command::WINDOW)?;

    transport.set_mode(Mode::Data)?;
    transport.select()?;
    for &packed in bytes {
        transport.write(&palette.expand(packed))?;
    }
    transport.deselect()?;
    transport.set_mode(Mode::Command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{NATIVE_WHITE, WHITE};
    use crate::testing::{Event, FailAfter, NoDelay, Recorder};
    use crate::{BUF_SIZE, WIDTH};

    fn display() -> Display<Recorder, NoDelay> {
        Display::new(Recorder::default(), NoDelay::default(), Config::default())
    }

    #[test]
    fn init_resets_then_configures_then_blanks() {
        let mut d = display();
        d.framebuffer_mut().set_pixel(0, 0, WHITE);
        d.init().unwrap();

        let rec = &d.transport;
        assert_eq!(rec.events[0], Event::Reset);
        assert_eq!(rec.command_bursts()[0], command::INIT.to_vec());
        assert_eq!(rec.command_bursts()[1], command::WINDOW.to_vec());
        assert_eq!(rec.data().len(), BUF_SIZE * 4);
        assert!(rec.data().iter().all(|&b| b == 0));
        assert!(d.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn refresh_streams_expanded_pixels() {
        let mut d = display();
        d.framebuffer_mut().set_pixel(0, 0, WHITE);
        d.framebuffer_mut().set_pixel(3, 0, 2);
        d.refresh().unwrap();

        let rec = &d.transport;
        assert_eq!(rec.command_bursts(), vec![command::WINDOW.to_vec()]);
        let data = rec.data();
        assert_eq!(data.len(), BUF_SIZE * 4);
        assert_eq!(&data[..8], &[0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00]);
        assert!(data[8..].iter().all(|&b| b == 0));
        // Ends deselected and back in command mode.
        let n = rec.events.len();
        assert_eq!(rec.events[n - 2], Event::Deselect);
        assert_eq!(rec.events[n - 1], Event::Mode(Mode::Command));
    }

    #[test]
    fn each_packed_byte_is_one_write() {
        let mut d = display();
        d.refresh().unwrap();
        let writes = d
            .transport
            .events
            .iter()
            .filter(|e| match e {
                Event::Write(bytes) => bytes.len() == 4,
                _ => false,
            })
            .count();
        assert_eq!(writes, BUF_SIZE);
    }

    #[test]
    fn debug_link_marker_is_transient() {
        let mut d = display();
        d.set_debug_link(true).unwrap();
        assert!(d.debug_link());

        // Shown on the wire...
        let data = d.transport.data();
        let row0 = &data[..WIDTH * 2];
        let pixel = |x: usize| u16::from_be_bytes([row0[2 * x], row0[2 * x + 1]]);
        assert_eq!(pixel(WIDTH - 5), NATIVE_WHITE);
        assert_eq!(pixel(WIDTH - 1), NATIVE_WHITE);
        assert_eq!(pixel(WIDTH - 6), 0);
        // ...but not left behind.
        assert!(d.buffer().iter().all(|&b| b == 0));

        d.transport.events.clear();
        d.set_debug_link(false).unwrap();
        assert!(d.transport.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn marker_removed_even_when_transport_fails() {
        let mut d = Display::new(FailAfter(3), NoDelay::default(), Config {
            debug_link: true,
            ..Config::default()
        });
        d.framebuffer_mut().set_pixel(WIDTH as i32 - 1, 0, 7);
        assert_eq!(d.refresh(), Err(Error::Transport(())));
        assert_eq!(d.framebuffer().pixel(WIDTH as i32 - 1, 0), Some(7));
        assert_eq!(d.framebuffer().pixel(WIDTH as i32 - 2, 0), Some(0));
    }

    #[test]
    fn set_buffer_round_trips() {
        let mut d = display();
        let mut bytes = [0u8; BUF_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i * 7) as u8;
        }
        d.set_buffer(&bytes).unwrap();
        assert_eq!(d.buffer(), &bytes[..]);
    }

    #[test]
    fn set_buffer_rejects_wrong_length() {
        let mut d = display();
        d.framebuffer_mut().set_pixel(4, 4, 4);
        let before = d.buffer().to_vec();
        let err = d.set_buffer(&[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::BufferLength(crate::error::LengthError {
                expected: BUF_SIZE,
                actual: 3
            })
        );
        assert_eq!(d.buffer(), &before[..]);
    }

    #[test]
    fn swipe_refreshes_every_frame_and_blanks() {
        let mut d = display();
        d.framebuffer_mut().fill_rect(0, 0, 95, 63, true, WHITE);
        d.swipe_left().unwrap();

        assert!(d.buffer().iter().all(|&b| b == 0));
        assert_eq!(d.transport.command_bursts().len(), WIDTH);
        assert_eq!(d.delay.total_us(), WIDTH as u64 * 20_000);

        d.framebuffer_mut().fill_rect(0, 0, 95, 63, true, WHITE);
        d.swipe_right().unwrap();
        assert!(d.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn swipe_first_frame_is_shifted() {
        let mut d = display();
        d.framebuffer_mut().set_pixel(1, 0, WHITE);
        d.swipe_left().unwrap();
        // First refresh shows the pixel at x = 0.
        let data = d.transport.data();
        assert_eq!(&data[..4], &[0xFF, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn frame_delay_is_configurable() {
        let mut d = Display::new(Recorder::default(), NoDelay::default(), Config {
            frame_delay_us: 5,
            ..Config::default()
        });
        d.swipe_right().unwrap();
        assert_eq!(d.delay.total_us(), WIDTH as u64 * 5);
    }
}

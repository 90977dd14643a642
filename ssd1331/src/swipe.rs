//! Wipe transitions.
//!
//! A swipe slides the whole picture off one side of the panel a pixel at a
//! time by shifting every packed scanline one nibble per frame. After `WIDTH`
//! frames nothing is left: the terminal state is an all-black framebuffer,
//! with no separate clear.

use gfx::nibble;

use crate::framebuffer::Framebuffer;
use crate::WIDTH;

/// Which way the picture leaves the panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

/// Progress of one swipe.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// `n` frames have been shifted so far, `n < WIDTH`.
    Animating(usize),
    /// Every pixel has been shifted out.
    Idle,
}

/// A swipe in progress, advanced one frame at a time by `step`.
///
/// `Display::swipe_left` and friends run this to completion. Drive it by hand
/// to interleave other work between frames, or to abandon the animation
/// part-way.
#[derive(Copy, Clone, Debug)]
pub struct Swipe {
    direction: Direction,
    state: State,
}

impl Swipe {
    pub fn new(direction: Direction) -> Self {
        Swipe {
            direction,
            state: State::Animating(0),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Frames left before the swipe finishes.
    pub fn remaining(&self) -> usize {
        match self.state {
            State::Animating(n) => WIDTH - n,
            State::Idle => 0,
        }
    }

    /// Shifts `fb` by one pixel. Returns `false`, without touching `fb`, once
    /// the swipe has finished.
    pub fn step(&mut self, fb: &mut Framebuffer) -> bool {
        let n = match self.state {
            State::Animating(n) => n,
            State::Idle => return false,
        };

        let shift: fn(&mut [u8]) = match self.direction {
            Direction::Left => nibble::shift_left,
            Direction::Right => nibble::shift_right,
        };
        for row in fb.rows_mut() {
            shift(row);
        }

        self.state = if n + 1 < WIDTH {
            State::Animating(n + 1)
        } else {
            State::Idle
        };
        true
    }
}

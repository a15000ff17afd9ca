//! Whole-ring brightness oscillator
//!
//! The level sweeps between 0 and the brightness ceiling, flipping
//! direction exactly when it lands on either boundary.

use crate::color::Rgb;
use crate::frame::FrameBuffer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeartbeatDirection {
    Rising,
    #[default]
    Falling,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeartbeatState {
    level: u8,
    direction: HeartbeatDirection,
}

impl HeartbeatState {
    pub const fn new() -> Self {
        Self {
            level: 0,
            direction: HeartbeatDirection::Falling,
        }
    }

    /// Current intensity
    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn direction(&self) -> HeartbeatDirection {
        self.direction
    }

    /// Start a sweep from the ceiling, falling first
    pub fn activate<const N: usize>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        color: Rgb,
        ceiling: u8,
    ) {
        self.level = ceiling;
        self.direction = HeartbeatDirection::Falling;
        self.render(frame, color);
    }

    /// Advance the level by `step` in the current direction
    ///
    /// The result is clamped to `0..=ceiling`. A level left above a lowered
    /// ceiling is pulled down to it here.
    pub fn step(&mut self, step: u8, ceiling: u8) {
        match self.direction {
            HeartbeatDirection::Rising => {
                let next = self.level.saturating_add(step);
                if next >= ceiling {
                    self.level = ceiling;
                    self.direction = HeartbeatDirection::Falling;
                } else {
                    self.level = next;
                }
            }
            HeartbeatDirection::Falling => {
                let next = self.level.saturating_sub(step).min(ceiling);
                self.level = next;
                if next == 0 {
                    self.direction = HeartbeatDirection::Rising;
                }
            }
        }
    }

    /// Paint the whole ring at the current level
    pub fn render<const N: usize>(&self, frame: &mut FrameBuffer<N>, color: Rgb) {
        frame.fill(color);
        frame.set_brightness(self.level);
    }
}

//! Single pixel chasing around the ring

use crate::color::Rgb;
use crate::frame::FrameBuffer;

/// Position of the lit pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotateState {
    index: usize,
}

impl RotateState {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Currently lit pixel
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Blank the ring and light pixel 0
    pub fn activate<const N: usize>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        color: Rgb,
        brightness: u8,
    ) {
        self.index = 0;
        frame.clear();
        frame.set_pixel(self.index, color);
        frame.set_brightness(brightness);
    }

    /// Move the lit pixel one step forward, blanking the one it left
    pub fn step<const N: usize>(&mut self, frame: &mut FrameBuffer<N>, color: Rgb) {
        if N == 0 {
            return;
        }
        let previous = self.index % N;
        self.index = (previous + 1) % N;
        frame.set_pixel(previous, crate::color::BLACK);
        frame.set_pixel(self.index, color);
    }
}

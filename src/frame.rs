//! Pixel buffer pushed to the output driver.

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};

/// One frame of the ring: per-pixel colors plus the global brightness
/// they are shown at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb; N],
    brightness: u8,
}

impl<const N: usize> FrameBuffer<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; N],
            brightness: 0,
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Extinguish every pixel
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set a single pixel. Indices past the end of the ring are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of pixels that are not black
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| **pixel != BLACK).count()
    }

    /// Push the frame to the driver
    pub fn flush<D: OutputDriver>(&self, driver: &mut D) {
        driver.write(&self.pixels, self.brightness);
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

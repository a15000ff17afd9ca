#![allow(dead_code)]

use embassy_time::Instant;
use myrtio_ring_lamp::color::{BLACK, Rgb};
use myrtio_ring_lamp::config::LED_COUNT;
use myrtio_ring_lamp::{LampConfig, LampController, OutputDriver};

/// Output driver that keeps every frame it was given
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<(Vec<Rgb>, u8)>,
}

impl RecordingDriver {
    pub fn last(&self) -> &(Vec<Rgb>, u8) {
        self.frames.last().expect("no frame was written")
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb], brightness: u8) {
        self.frames.push((colors.to_vec(), brightness));
    }
}

pub type TestController = LampController<RecordingDriver, LED_COUNT>;

pub fn ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

pub fn controller() -> TestController {
    LampController::new(RecordingDriver::default(), LampConfig::default())
}

pub fn controller_with(config: LampConfig) -> TestController {
    LampController::new(RecordingDriver::default(), config)
}

/// Indices of pixels that are not black
pub fn lit_pixels(pixels: &[Rgb]) -> Vec<usize> {
    pixels
        .iter()
        .enumerate()
        .filter(|(_, pixel)| **pixel != BLACK)
        .map(|(index, _)| index)
        .collect()
}

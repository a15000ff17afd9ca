//! Output drivers built on top of `smart-leds` writers.

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::math8::scale8;

/// Adapts any [`SmartLedsWrite`] implementation (WS2812 over RMT, SPI, ...)
/// to the lamp's [`OutputDriver`] by scaling pixels with the frame
/// brightness before they are written.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub const fn inner(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb], brightness: u8) {
        let scaled = colors.iter().map(|pixel| Rgb {
            r: scale8(pixel.r, brightness),
            g: scale8(pixel.g, brightness),
            b: scale8(pixel.b, brightness),
        });
        // A dropped frame is repaired by the next one
        if self.writer.write(scaled).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to write frame");
        }
    }
}

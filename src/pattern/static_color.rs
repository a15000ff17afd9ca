use crate::color::Rgb;
use crate::frame::FrameBuffer;

/// Light the whole ring with one color
pub fn fill_static<const N: usize>(frame: &mut FrameBuffer<N>, color: Rgb, brightness: u8) {
    frame.fill(color);
    frame.set_brightness(brightness);
}

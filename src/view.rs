use crate::color::Rgb;
use crate::math8::percent8;
use crate::pattern::PatternId;
use crate::state::LampState;

/// Read-only snapshot of the lamp, as shown on the control page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LampView {
    pub is_on: bool,
    pub pattern: PatternId,
    /// Packed `0xRRGGBB`
    pub color: u32,
    pub channels: Rgb,
    pub brightness: u8,
}

impl LampView {
    pub const fn from_state(state: &LampState) -> Self {
        Self {
            is_on: state.is_on(),
            pattern: state.pattern(),
            color: state.color(),
            channels: state.channels(),
            brightness: state.brightness(),
        }
    }

    /// Brightness as a whole percentage of full scale
    pub const fn brightness_percent(&self) -> u8 {
        percent8(self.brightness)
    }
}

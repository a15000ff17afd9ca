//! Build-time constants and the lamp configuration.

use embassy_time::Duration;

use crate::color::{PALETTE, rgb_to_u32};
use crate::math8::clamp8;

/// Number of pixels on the ring
pub const LED_COUNT: usize = 8;

/// Minimum gap between two ROTATE steps
pub const ROTATE_INTERVAL: Duration = Duration::from_millis(120);
/// Minimum gap between two HEARTBEAT steps
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(25);

pub const BRIGHTNESS_MIN: u8 = 1;
pub const BRIGHTNESS_MAX: u8 = 255;
/// Startup brightness (50%)
pub const DEFAULT_BRIGHTNESS: u8 = 128;
pub const BRIGHTNESS_STEP: u8 = 5;
pub const CHANNEL_STEP: u8 = 1;
/// Level change per HEARTBEAT tick
pub const HEARTBEAT_STEP: u8 = 1;

pub const SERIAL_BAUD_RATE: u32 = 9600;
/// How long the boot prompt waits for an answer on the serial console
pub const SERIAL_TIMEOUT: Duration = Duration::from_millis(8000);

/// Size of the byte region holding WiFi credentials
///
/// Three separators plus 256 bytes for SSID and password.
pub const CREDENTIALS_STORAGE_SIZE: usize = 259;

/// Lamp controller configuration
#[derive(Debug, Clone)]
pub struct LampConfig {
    pub brightness_min: u8,
    pub brightness_max: u8,
    pub brightness_step: u8,
    pub channel_step: u8,
    pub heartbeat_step: u8,
    pub rotate_interval: Duration,
    pub heartbeat_interval: Duration,
    /// Brightness applied at startup
    pub brightness: u8,
    /// Packed `0xRRGGBB` color applied at startup
    pub color: u32,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            brightness_min: BRIGHTNESS_MIN,
            brightness_max: BRIGHTNESS_MAX,
            brightness_step: BRIGHTNESS_STEP,
            channel_step: CHANNEL_STEP,
            heartbeat_step: HEARTBEAT_STEP,
            rotate_interval: ROTATE_INTERVAL,
            heartbeat_interval: HEARTBEAT_INTERVAL,
            brightness: DEFAULT_BRIGHTNESS,
            color: rgb_to_u32(PALETTE[0].color),
        }
    }
}

impl LampConfig {
    /// Clamp a brightness value into the configured range
    pub const fn clamp_brightness(&self, brightness: u8) -> u8 {
        clamp8(brightness, self.brightness_min, self.brightness_max)
    }
}

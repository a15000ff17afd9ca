//! The single mutable lamp record
//!
//! Fields are written only by the [`LampController`](crate::LampController)
//! and the [`AnimationDriver`](crate::AnimationDriver); everyone else gets
//! read-only accessors.

use embassy_time::Instant;

use crate::color::{BLACK, Rgb, rgb_from_u32};
use crate::config::LampConfig;
use crate::pattern::{HeartbeatState, PatternId, RotateState};

/// Ticker bookkeeping for the animated patterns
#[derive(Debug, Clone)]
pub struct AnimationState {
    pub(crate) rotate: RotateState,
    pub(crate) heartbeat: HeartbeatState,
    pub(crate) timer_enabled: bool,
    pub(crate) last_tick: Instant,
}

impl AnimationState {
    const fn new() -> Self {
        Self {
            rotate: RotateState::new(),
            heartbeat: HeartbeatState::new(),
            timer_enabled: false,
            last_tick: Instant::from_millis(0),
        }
    }

    pub const fn rotate(&self) -> &RotateState {
        &self.rotate
    }

    pub const fn heartbeat(&self) -> &HeartbeatState {
        &self.heartbeat
    }

    pub const fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Arm the ticker, counting the next interval from `now`
    pub(crate) fn start(&mut self, now: Instant) {
        self.timer_enabled = true;
        self.last_tick = now;
    }

    pub(crate) fn stop(&mut self) {
        self.timer_enabled = false;
    }
}

#[derive(Debug, Clone)]
pub struct LampState {
    pub(crate) is_on: bool,
    pub(crate) pattern: PatternId,
    /// Packed `0xRRGGBB`
    pub(crate) color: u32,
    pub(crate) channels: Rgb,
    pub(crate) brightness: u8,
    pub(crate) animation: AnimationState,
}

impl LampState {
    /// Startup state: off, static, configured color and brightness
    pub fn new(config: &LampConfig) -> Self {
        Self {
            is_on: false,
            pattern: PatternId::Static,
            color: config.color & 0x00FF_FFFF,
            channels: BLACK,
            brightness: config.clamp_brightness(config.brightness),
            animation: AnimationState::new(),
        }
    }

    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    pub const fn pattern(&self) -> PatternId {
        self.pattern
    }

    pub const fn color(&self) -> u32 {
        self.color
    }

    pub const fn color_rgb(&self) -> Rgb {
        rgb_from_u32(self.color)
    }

    /// R/G/B view of the color; all zero while the lamp is off
    pub const fn channels(&self) -> Rgb {
        self.channels
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Re-derive the channels from the packed color
    pub(crate) fn sync_channels(&mut self) {
        self.channels = if self.is_on {
            rgb_from_u32(self.color)
        } else {
            BLACK
        };
    }
}

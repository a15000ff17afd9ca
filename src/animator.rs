//! Non-blocking animation ticker
//!
//! Called once per iteration of the host service loop. It samples the
//! clock passed in, compares against the last step and returns at once
//! when the pattern interval has not elapsed yet. Missed steps are not
//! replayed: the interval is a minimum gap, not a fixed rate.

use embassy_time::{Duration, Instant};

use crate::config::LampConfig;
use crate::frame::FrameBuffer;
use crate::pattern::PatternId;
use crate::state::LampState;

#[derive(Debug, Clone, Copy)]
pub struct AnimationDriver {
    rotate_interval: Duration,
    heartbeat_interval: Duration,
    heartbeat_step: u8,
}

impl AnimationDriver {
    pub fn new(config: &LampConfig) -> Self {
        Self {
            rotate_interval: config.rotate_interval,
            heartbeat_interval: config.heartbeat_interval,
            heartbeat_step: config.heartbeat_step,
        }
    }

    const fn interval(&self, pattern: PatternId) -> Option<Duration> {
        match pattern {
            PatternId::Static => None,
            PatternId::Rotate => Some(self.rotate_interval),
            PatternId::Heartbeat => Some(self.heartbeat_interval),
        }
    }

    /// Advance the active pattern if its interval has elapsed
    ///
    /// Returns `true` when the frame changed and must be pushed.
    pub fn tick<const N: usize>(
        &self,
        state: &mut LampState,
        frame: &mut FrameBuffer<N>,
        now: Instant,
    ) -> bool {
        let Some(interval) = self.interval(state.pattern) else {
            return false;
        };
        if now.saturating_duration_since(state.animation.last_tick) < interval {
            return false;
        }
        if !state.animation.timer_enabled || !state.is_on {
            return false;
        }

        state.animation.last_tick = now;
        let color = state.color_rgb();
        match state.pattern {
            PatternId::Rotate => {
                state.animation.rotate.step(frame, color);
            }
            PatternId::Heartbeat => {
                let heartbeat = &mut state.animation.heartbeat;
                heartbeat.step(self.heartbeat_step, state.brightness);
                heartbeat.render(frame, color);
            }
            PatternId::Static => return false,
        }
        true
    }
}

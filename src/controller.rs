//! Lamp controller - the only mutator of the lamp state
//!
//! Every operation runs to completion, leaves the state consistent and
//! pushes one frame to the output driver before returning. Nothing here
//! can fail: out-of-range requests are clamped.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animator::AnimationDriver;
use crate::color::{palette_color, palette_index, rgb_to_u32};
use crate::command::{ColorChannel, LampCommand, Step};
use crate::config::{LED_COUNT, LampConfig};
use crate::frame::FrameBuffer;
use crate::math8::{add_clamped, sub_clamped};
use crate::pattern::{PatternId, fill_static};
use crate::state::LampState;
use crate::view::LampView;

pub struct LampController<D: OutputDriver, const N: usize = LED_COUNT> {
    // External dependencies and configuration
    driver: D,
    config: LampConfig,
    animator: AnimationDriver,

    // Internal state
    state: LampState,
    frame: FrameBuffer<N>,
}

impl<D: OutputDriver, const N: usize> LampController<D, N> {
    /// Create a controller with the startup state described by `config`
    ///
    /// The lamp starts off; nothing is written to the driver until the
    /// first operation.
    pub fn new(driver: D, config: LampConfig) -> Self {
        Self {
            driver,
            animator: AnimationDriver::new(&config),
            state: LampState::new(&config),
            frame: FrameBuffer::new(),
            config,
        }
    }

    pub const fn state(&self) -> &LampState {
        &self.state
    }

    pub const fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Snapshot used to render the control page
    pub fn view(&self) -> LampView {
        LampView::from_state(&self.state)
    }

    /// Run the operation named by `command`
    pub fn apply(&mut self, command: LampCommand, now: Instant) {
        match command {
            LampCommand::PowerOn => self.power_on(now),
            LampCommand::PowerOff => self.power_off(),
            LampCommand::SetPattern(pattern) => self.set_pattern(pattern, now),
            LampCommand::SetColor(color) => self.set_color(color),
            LampCommand::AdjustBrightness(step) => self.adjust_brightness(step),
            LampCommand::AdjustChannel(channel, step) => self.adjust_channel(channel, step),
            LampCommand::SelectPaletteColor(index) => self.select_palette_color(index),
        }
    }

    /// Turn the lamp on and re-apply the selected pattern
    pub fn power_on(&mut self, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[LampController.power_on] pattern {}", self.state.pattern.as_str());
        self.state.is_on = true;
        self.state.sync_channels();
        self.activate(self.state.pattern, now);
        self.render();
    }

    /// Turn the lamp off, keeping pattern, color and brightness
    pub fn power_off(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[LampController.power_off]");
        self.state.animation.stop();
        self.frame.clear();
        self.state.is_on = false;
        self.state.sync_channels();
        self.render();
    }

    /// Switch pattern. Ignored while the lamp is off.
    pub fn set_pattern(&mut self, pattern: PatternId, now: Instant) {
        if self.state.is_on {
            #[cfg(feature = "esp32-log")]
            println!("[LampController.set_pattern] {}", pattern.as_str());
            self.activate(pattern, now);
        }
        self.render();
    }

    /// Set the packed `0xRRGGBB` color
    pub fn set_color(&mut self, color: u32) {
        self.state.color = color & 0x00FF_FFFF;
        self.state.sync_channels();
        if self.state.is_on {
            let color = self.state.color_rgb();
            match self.state.pattern {
                PatternId::Static => self.frame.fill(color),
                PatternId::Heartbeat => self.state.animation.heartbeat.render(&mut self.frame, color),
                // The next step paints with the new color
                PatternId::Rotate => {}
            }
        }
        self.render();
    }

    /// Step the brightness ceiling. Ignored while the lamp is off.
    ///
    /// Under HEARTBEAT the current level is left alone; the next tick pulls
    /// it back under the new ceiling.
    pub fn adjust_brightness(&mut self, step: Step) {
        if self.state.is_on {
            let config = &self.config;
            let current = self.state.brightness;
            self.state.brightness = match step {
                Step::Increase => add_clamped(
                    current,
                    config.brightness_step,
                    config.brightness_min,
                    config.brightness_max,
                ),
                Step::Decrease => sub_clamped(
                    current,
                    config.brightness_step,
                    config.brightness_min,
                    config.brightness_max,
                ),
            };
            match self.state.pattern {
                PatternId::Static | PatternId::Rotate => {
                    self.frame.set_brightness(self.state.brightness);
                }
                PatternId::Heartbeat => {}
            }
        }
        self.render();
    }

    /// Step one color channel and recompose the color from the channels
    pub fn adjust_channel(&mut self, channel: ColorChannel, step: Step) {
        // Channels are the source here; while off they read zero
        let mut channels = self.state.channels;
        let value = match channel {
            ColorChannel::Red => &mut channels.r,
            ColorChannel::Green => &mut channels.g,
            ColorChannel::Blue => &mut channels.b,
        };
        *value = match step {
            Step::Increase => value.saturating_add(self.config.channel_step),
            Step::Decrease => value.saturating_sub(self.config.channel_step),
        };
        self.set_color(rgb_to_u32(channels));
    }

    /// Pick a palette entry; indices past the end select the last entry
    pub fn select_palette_color(&mut self, index: usize) {
        let index = palette_index(index);
        #[cfg(feature = "esp32-log")]
        println!("[LampController.select_palette_color] {}", index);
        self.set_color(rgb_to_u32(palette_color(index)));
    }

    /// Give the animation a chance to advance
    ///
    /// Never blocks. Returns `true` if a new frame was pushed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.animator.tick(&mut self.state, &mut self.frame, now);
        if changed {
            self.render();
        }
        changed
    }

    /// Pattern activation shared by `power_on` and `set_pattern`
    fn activate(&mut self, pattern: PatternId, now: Instant) {
        let color = self.state.color_rgb();
        let brightness = self.state.brightness;
        let animation = &mut self.state.animation;
        self.state.pattern = pattern;
        match pattern {
            PatternId::Static => {
                animation.stop();
                fill_static(&mut self.frame, color, brightness);
            }
            PatternId::Rotate => {
                animation.rotate.activate(&mut self.frame, color, brightness);
                animation.start(now);
            }
            PatternId::Heartbeat => {
                animation.heartbeat.activate(&mut self.frame, color, brightness);
                animation.start(now);
            }
        }
    }

    fn render(&mut self) {
        self.frame.flush(&mut self.driver);
    }
}

#![no_std]

pub mod animator;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod display;
pub mod driver;
pub mod frame;
pub mod http;
pub mod math8;
pub mod page;
pub mod pattern;
pub mod provisioning;
pub mod queue;
pub mod route;
pub mod service;
pub mod state;
pub mod view;

pub use animator::AnimationDriver;
pub use command::{ColorChannel, LampCommand, Step};
pub use config::LampConfig;
pub use controller::LampController;
pub use credentials::{CredentialStore, CredentialsError, WifiCredentials};
pub use display::{StatusDisplay, StatusScreen};
pub use driver::SmartLedsOutput;
pub use frame::FrameBuffer;
pub use pattern::{HeartbeatDirection, PatternId};
pub use provisioning::{BootChoice, BootPrompt, Prompt, Provisioning, ProvisioningState};
pub use queue::{CommandQueue, QueueFull, Ticket, ViewCell};
pub use route::Route;
pub use service::LampService;
pub use state::LampState;
pub use view::LampView;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Writing the same frame twice must be harmless.
pub trait OutputDriver {
    /// Write colors to the LED ring at the given global brightness
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}

//! Pattern system with compile-time known pattern variants
//!
//! Each pattern owns only the bookkeeping it needs between ticks and
//! writes its frames straight into the [`FrameBuffer`](crate::frame::FrameBuffer).

mod heartbeat;
mod rotate;
mod static_color;

pub use heartbeat::{HeartbeatDirection, HeartbeatState};
pub use rotate::RotateState;
pub use static_color::fill_static;

const PATTERN_NAME_STATIC: &str = "static";
const PATTERN_NAME_HEARTBEAT: &str = "heartbeat";
const PATTERN_NAME_ROTATE: &str = "rotate";

const PATTERN_ID_STATIC: u8 = 0;
const PATTERN_ID_HEARTBEAT: u8 = 1;
const PATTERN_ID_ROTATE: u8 = 2;

/// Known patterns that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    /// Constant full-ring color
    #[default]
    Static = PATTERN_ID_STATIC,
    /// Whole-ring brightness pulsing
    Heartbeat = PATTERN_ID_HEARTBEAT,
    /// Single lit pixel circulating around the ring
    Rotate = PATTERN_ID_ROTATE,
}

impl PatternId {
    pub const ALL: [Self; 3] = [Self::Static, Self::Heartbeat, Self::Rotate];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_STATIC => Self::Static,
            PATTERN_ID_HEARTBEAT => Self::Heartbeat,
            PATTERN_ID_ROTATE => Self::Rotate,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => PATTERN_NAME_STATIC,
            Self::Heartbeat => PATTERN_NAME_HEARTBEAT,
            Self::Rotate => PATTERN_NAME_ROTATE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_STATIC => Some(Self::Static),
            PATTERN_NAME_HEARTBEAT => Some(Self::Heartbeat),
            PATTERN_NAME_ROTATE => Some(Self::Rotate),
            _ => None,
        }
    }

    /// Title shown on the control page
    pub const fn title(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Heartbeat => "Heartbeat",
            Self::Rotate => "Rotate",
        }
    }

    /// Whether the pattern needs the animation ticker
    pub const fn is_animated(self) -> bool {
        !matches!(self, Self::Static)
    }
}

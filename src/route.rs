//! Control page routes
//!
//! Every route is a plain GET. The palette route carries its index as a
//! decimal path parameter: `/color/{index}`.

use core::fmt::{self, Write};

use crate::color::palette_index;
use crate::command::{ColorChannel, LampCommand, Step};
use crate::pattern::PatternId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Render the current view without changing anything
    Index,
    On,
    Off,
    Pattern(PatternId),
    Brightness(Step),
    Channel(ColorChannel, Step),
    /// Palette index, already clamped to the table
    Color(usize),
}

impl Route {
    /// Parse a request path. A query string, if any, is ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let rest = path.strip_prefix('/')?;

        let mut segments = rest.split('/');
        let first = segments.next().unwrap_or("");
        let second = segments.next();
        if segments.next().is_some() {
            return None;
        }

        let route = match (first, second) {
            ("", None) => Self::Index,
            ("on", None) => Self::On,
            ("off", None) => Self::Off,
            ("brightness", Some(step)) => Self::Brightness(parse_step(step)?),
            ("color", Some(index)) => Self::Color(parse_index(index)?),
            (channel, Some(step)) => {
                Self::Channel(ColorChannel::parse_from_str(channel)?, parse_step(step)?)
            }
            (pattern, None) => Self::Pattern(PatternId::parse_from_str(pattern)?),
        };
        Some(route)
    }

    /// Controller command behind the route; `None` for the plain page view
    pub const fn command(self) -> Option<LampCommand> {
        Some(match self {
            Self::Index => return None,
            Self::On => LampCommand::PowerOn,
            Self::Off => LampCommand::PowerOff,
            Self::Pattern(pattern) => LampCommand::SetPattern(pattern),
            Self::Brightness(step) => LampCommand::AdjustBrightness(step),
            Self::Channel(channel, step) => LampCommand::AdjustChannel(channel, step),
            Self::Color(index) => LampCommand::SelectPaletteColor(index),
        })
    }

    /// Write the request path for this route
    pub fn write_path(self, out: &mut impl Write) -> fmt::Result {
        match self {
            Self::Index => out.write_str("/"),
            Self::On => out.write_str("/on"),
            Self::Off => out.write_str("/off"),
            Self::Pattern(pattern) => write!(out, "/{}", pattern.as_str()),
            Self::Brightness(step) => write!(out, "/brightness/{}", step_str(step)),
            Self::Channel(channel, step) => {
                write!(out, "/{}/{}", channel.as_str(), step_str(step))
            }
            Self::Color(index) => write!(out, "/color/{}", index),
        }
    }
}

const fn step_str(step: Step) -> &'static str {
    match step {
        Step::Increase => "inc",
        Step::Decrease => "dec",
    }
}

fn parse_step(s: &str) -> Option<Step> {
    match s {
        "inc" => Some(Step::Increase),
        "dec" => Some(Step::Decrease),
        _ => None,
    }
}

/// Decimal palette index. Anything past the table clamps to the last entry.
fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digits only, so a parse failure means overflow
    let index = s.parse::<usize>().unwrap_or(usize::MAX);
    Some(palette_index(index))
}

use crate::pattern::PatternId;

/// Direction of a stepped adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increase,
    Decrease,
}

/// One of the three components of the lamp color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Route segment and page label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "r",
            Self::Green => "g",
            Self::Blue => "b",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            "r" => Some(Self::Red),
            "g" => Some(Self::Green),
            "b" => Some(Self::Blue),
            _ => None,
        }
    }
}

/// Operations that can be performed on the lamp
///
/// Each command maps to exactly one controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampCommand {
    PowerOn,
    PowerOff,
    SetPattern(PatternId),
    /// Set a packed `0xRRGGBB` color
    SetColor(u32),
    AdjustBrightness(Step),
    AdjustChannel(ColorChannel, Step),
    /// Select a palette entry; out-of-range indices clamp to the last one
    SelectPaletteColor(usize),
}

//! Fixed color palette offered on the control page

use super::{Rgb, rgb_from_u32};

/// Number of entries in [`PALETTE`]
pub const PALETTE_SIZE: usize = 40;

/// Named palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Rgb,
}

const fn entry(name: &'static str, color: u32) -> PaletteEntry {
    PaletteEntry {
        name,
        color: rgb_from_u32(color),
    }
}

pub const PALETTE: [PaletteEntry; PALETTE_SIZE] = [
    // Whites
    entry("white", 0xFF_E08C),
    entry("candle", 0xFF_9329),
    entry("tungsten", 0xFF_D6AA),
    entry("ivory", 0xFF_FFF0),
    entry("clear_blue_sky", 0x40_9CFF),
    entry("fluorescent", 0xF4_FFFA),
    entry("halogen", 0xFF_F1E0),
    entry("pure_white", 0xFF_FFFF),
    entry("off_white", 0xF2_E9EA),
    entry("cream", 0xEE_E1C6),
    // Yellows
    entry("butter", 0xF6_EB61),
    entry("canary_yellow", 0xFF_EF00),
    entry("banana_yellow", 0xFE_DD00),
    entry("cheese", 0xFB_DB65),
    entry("neon_yellow", 0xE0_E722),
    entry("marigold", 0xFF_AD4A),
    entry("honey", 0xEB_BC4E),
    entry("mustard", 0xEA_AA00),
    entry("harvest_gold", 0xDA_9100),
    entry("satin_gold", 0xCB_A135),
    // Blues
    entry("fluorescent_blue", 0x11_FFEE),
    entry("pastel", 0x8B_D3E6),
    entry("aqua", 0x05_C3DD),
    entry("sky_blue", 0x00_B5E2),
    entry("malibu_blue", 0x58_7EDE),
    entry("teal_blue", 0x00_7C80),
    entry("ocean_blue", 0x00_5EB8),
    entry("sapphire_blue", 0x0F_52BA),
    entry("neon_blue", 0x4D_4DFF),
    entry("indigo", 0x4B_0082),
    // Warm and purple
    entry("amber", 0xFF_C600),
    entry("apricot", 0xFF_B673),
    entry("peach", 0xFF_CBA4),
    entry("amaranth", 0xF4_364C),
    entry("rose_red", 0xFF_033E),
    entry("scarlet", 0xBB_0000),
    entry("thistle", 0xD8_BFD8),
    entry("neon_purple", 0xC7_24B1),
    entry("classic_purple", 0xBB_29BB),
    entry("grape", 0x80_31A7),
];

/// Clamp a requested palette index to the last valid entry
pub const fn palette_index(index: usize) -> usize {
    if index >= PALETTE_SIZE {
        PALETTE_SIZE - 1
    } else {
        index
    }
}

/// Look up a palette color, clamping out-of-range indices
pub const fn palette_color(index: usize) -> Rgb {
    PALETTE[palette_index(index)].color
}

mod palette;
mod utils;

pub use palette::{PALETTE, PALETTE_SIZE, PaletteEntry, palette_color, palette_index};
use smart_leds::RGB8;
pub use utils::{BLACK, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;

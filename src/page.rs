//! HTML control page
//!
//! Rendered straight into any [`core::fmt::Write`] sink, so the page can be
//! measured first and then streamed without a large buffer.

use core::fmt::{self, Write};

use crate::color::{PALETTE, Rgb, rgb_to_u32};
use crate::command::{ColorChannel, Step};
use crate::pattern::PatternId;
use crate::route::Route;
use crate::view::LampView;

const TITLE: &str = "Eperly - Lite";

const HEAD: &str = "<!doctype html><html lang='en'><head><meta charset='utf-8'>\
<meta name='viewport' content='width=device-width, initial-scale=1'>\
<style>body{font-family:sans-serif;color:#253349}.c{text-align:center}\
.off{border:none;background-color:grey;padding:5px}\
.on{border:none;background-color:green;padding:5px}\
.sel{border:none;background-color:yellow;padding:5px}\
.sw{border-width:2px;padding:10px}</style>";

const SWATCHES_PER_ROW: usize = 10;

/// Write the full control page for `view`
pub fn render_page(view: &LampView, out: &mut impl Write) -> fmt::Result {
    out.write_str(HEAD)?;
    write!(out, "<title>{}</title></head><body>", TITLE)?;
    write!(out, "<div class='c'><h2>{}</h2></div><hr>", TITLE)?;

    write_power_switch(view, out)?;
    write_patterns(view, out)?;
    write_brightness(view, out)?;
    write_palette(out)?;
    for channel in ColorChannel::ALL {
        write_channel(view.channels, channel, out)?;
    }

    out.write_str("</body></html>")
}

fn write_button(out: &mut impl Write, route: Route, class: &str, label: &str) -> fmt::Result {
    out.write_str("<a href='")?;
    route.write_path(out)?;
    write!(out, "'><button class='{}'>{}</button></a>", class, label)
}

fn write_power_switch(view: &LampView, out: &mut impl Write) -> fmt::Result {
    out.write_str("<div class='c'>")?;
    if view.is_on {
        write_button(out, Route::Off, "on", "Lamp OFF")?;
    } else {
        write_button(out, Route::On, "off", "Lamp ON")?;
    }
    out.write_str("</div><hr>")
}

fn write_patterns(view: &LampView, out: &mut impl Write) -> fmt::Result {
    out.write_str("<div class='c'>")?;
    for pattern in PatternId::ALL {
        let class = if pattern == view.pattern { "sel" } else { "off" };
        write_button(out, Route::Pattern(pattern), class, pattern.title())?;
    }
    out.write_str("</div><hr>")
}

fn write_brightness(view: &LampView, out: &mut impl Write) -> fmt::Result {
    out.write_str("<div class='c'>")?;
    write_button(out, Route::Brightness(Step::Decrease), "off", " - ")?;
    write!(
        out,
        "<button class='off'>Brightness = {}%</button>",
        view.brightness_percent()
    )?;
    write_button(out, Route::Brightness(Step::Increase), "off", " + ")?;
    out.write_str("</div><hr>")
}

fn write_palette(out: &mut impl Write) -> fmt::Result {
    for (row, entries) in PALETTE.chunks(SWATCHES_PER_ROW).enumerate() {
        out.write_str("<div class='c'>")?;
        for (column, entry) in entries.iter().enumerate() {
            let index = row * SWATCHES_PER_ROW + column;
            out.write_str("<a href='")?;
            Route::Color(index).write_path(out)?;
            write!(
                out,
                "' title='{}'><button class='sw' style='background-color:#{:06X}'></button></a>",
                entry.name,
                rgb_to_u32(entry.color)
            )?;
        }
        out.write_str("</div><br>")?;
    }
    out.write_str("<hr>")
}

fn write_channel(channels: Rgb, channel: ColorChannel, out: &mut impl Write) -> fmt::Result {
    let (label, value) = match channel {
        ColorChannel::Red => ("R", channels.r),
        ColorChannel::Green => ("G", channels.g),
        ColorChannel::Blue => ("B", channels.b),
    };
    out.write_str("<div class='c'>")?;
    write_button(out, Route::Channel(channel, Step::Decrease), "off", " - ")?;
    write!(out, "<button class='off'>{} = {}</button>", label, value)?;
    write_button(out, Route::Channel(channel, Step::Increase), "off", " + ")?;
    out.write_str("</div><hr>")
}

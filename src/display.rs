//! Status lines for the small monochrome display

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::SERIAL_BAUD_RATE;

const LINE_CAPACITY: usize = 40;
const MAX_LINES: usize = 4;

/// Display capability. The driver owns fonts and pixel positions.
pub trait StatusDisplay {
    fn clear(&mut self);
    fn draw_lines(&mut self, lines: &[&str]);
    fn show(&mut self);
}

/// Screens shown while booting and connecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusScreen<'a> {
    Splash { version: &'a str },
    NoCredentials,
    CredentialsFound { ssid: &'a str },
    Connecting { ssid: &'a str },
    Connected { ssid: &'a str, address: &'a str },
}

impl StatusScreen<'_> {
    /// Text lines of the screen, each prefixed with `> `
    pub fn lines(&self) -> Vec<String<LINE_CAPACITY>, MAX_LINES> {
        let mut lines = Vec::new();
        let mut push = |args: core::fmt::Arguments<'_>| {
            let mut line = String::new();
            // Text past the line capacity is dropped
            let _ = line.write_str("> ");
            let _ = line.write_fmt(args);
            let _ = lines.push(line);
        };
        match *self {
            Self::Splash { version } => {
                push(format_args!("Eperly-Lite"));
                push(format_args!("Firmware Ver.: {}", version));
            }
            Self::NoCredentials => {
                push(format_args!("No WiFi info saved."));
                push(format_args!("Configure through USB"));
                push(format_args!("Baud Rate = {}", SERIAL_BAUD_RATE));
            }
            Self::CredentialsFound { ssid } => {
                push(format_args!("Wifi credentials found."));
                push(format_args!("{}", ssid));
                push(format_args!("Update through USB"));
                push(format_args!("Baud Rate = {}", SERIAL_BAUD_RATE));
            }
            Self::Connecting { ssid } => {
                push(format_args!("Connecting to WiFi"));
                push(format_args!("{}", ssid));
            }
            Self::Connected { ssid, address } => {
                push(format_args!("Wifi Connected"));
                push(format_args!("{}", ssid));
                push(format_args!("{}", address));
            }
        }
        lines
    }

    /// Replace the display contents with this screen
    pub fn show_on(&self, display: &mut impl StatusDisplay) {
        let lines = self.lines();
        let mut refs: Vec<&str, MAX_LINES> = Vec::new();
        for line in &lines {
            let _ = refs.push(line.as_str());
        }
        display.clear();
        display.draw_lines(&refs);
        display.show();
    }
}

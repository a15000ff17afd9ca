//! Serial console provisioning of WiFi credentials
//!
//! Both flows are fed one input byte at a time by the host, which owns the
//! UART. They never wait on their own.

use core::fmt::{self, Write};

use embassy_time::{Duration, Instant};
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::credentials::{PASSWORD_CAPACITY, SSID_CAPACITY, WifiCredentials};

/// Answer to the boot-time "update credentials?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootChoice {
    /// Keep the stored credentials
    Keep,
    /// Run [`Provisioning`] and store the result
    Update,
    /// Wipe the stored credentials
    Erase,
}

/// Boot prompt shown when credentials are already stored
#[derive(Debug, Clone, Copy)]
pub struct BootPrompt {
    started: Instant,
    timeout: Duration,
}

impl BootPrompt {
    pub const QUESTION: &'static str = "Would you like to update WiFi credentials? (Y/N):";

    pub const fn new(now: Instant, timeout: Duration) -> Self {
        Self {
            started: now,
            timeout,
        }
    }

    /// Interpret one input byte. Unknown bytes are ignored.
    pub fn on_byte(&self, byte: u8) -> Option<BootChoice> {
        match byte {
            b'Y' | b'y' => Some(BootChoice::Update),
            b'N' | b'n' => Some(BootChoice::Keep),
            b'~' => Some(BootChoice::Erase),
            _ => None,
        }
    }

    /// No answer within the timeout keeps the stored credentials
    pub fn check_timeout(&self, now: Instant) -> Option<BootChoice> {
        if now.saturating_duration_since(self.started) > self.timeout {
            Some(BootChoice::Keep)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningState {
    AwaitingSsid,
    ConfirmingSsid,
    AwaitingPassword,
    ConfirmingPassword,
    Done,
}

/// Console output requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    EnterSsid,
    ConfirmSsid,
    EnterPassword,
    ConfirmPassword,
    Finished,
}

/// Entry and confirmation of SSID and password
#[derive(Debug, Clone)]
pub struct Provisioning {
    state: ProvisioningState,
    ssid: String<SSID_CAPACITY>,
    password: String<PASSWORD_CAPACITY>,
}

impl Default for Provisioning {
    fn default() -> Self {
        Self::new()
    }
}

impl Provisioning {
    pub const fn new() -> Self {
        Self {
            state: ProvisioningState::AwaitingSsid,
            ssid: String::new(),
            password: String::new(),
        }
    }

    /// Prompt to print before feeding the first byte
    pub const fn start(&self) -> Prompt {
        Prompt::EnterSsid
    }

    pub const fn state(&self) -> ProvisioningState {
        self.state
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Feed one input byte
    ///
    /// Returns the prompt to print when the state changed.
    pub fn on_byte(&mut self, byte: u8) -> Option<Prompt> {
        let is_line_end = matches!(byte, b'\r' | b'\n');
        let next = match self.state {
            ProvisioningState::AwaitingSsid => {
                if !is_line_end {
                    push_byte(&mut self.ssid, byte);
                    return None;
                }
                if self.ssid.is_empty() {
                    return None;
                }
                (ProvisioningState::ConfirmingSsid, Prompt::ConfirmSsid)
            }
            ProvisioningState::ConfirmingSsid => match byte {
                b'Y' | b'y' => (ProvisioningState::AwaitingPassword, Prompt::EnterPassword),
                b'N' | b'n' => {
                    self.ssid.clear();
                    (ProvisioningState::AwaitingSsid, Prompt::EnterSsid)
                }
                _ => return None,
            },
            ProvisioningState::AwaitingPassword => {
                if !is_line_end {
                    push_byte(&mut self.password, byte);
                    return None;
                }
                if self.password.is_empty() {
                    return None;
                }
                (ProvisioningState::ConfirmingPassword, Prompt::ConfirmPassword)
            }
            ProvisioningState::ConfirmingPassword => match byte {
                b'Y' | b'y' => (ProvisioningState::Done, Prompt::Finished),
                b'N' | b'n' => {
                    self.password.clear();
                    (ProvisioningState::AwaitingPassword, Prompt::EnterPassword)
                }
                _ => return None,
            },
            ProvisioningState::Done => return None,
        };

        let (state, prompt) = next;
        #[cfg(feature = "esp32-log")]
        println!("provisioning: {:?} -> {:?}", self.state, state);
        self.state = state;
        Some(prompt)
    }

    /// Confirmed credentials, once both entries were accepted
    pub fn credentials(&self) -> Option<WifiCredentials> {
        if self.state != ProvisioningState::Done {
            return None;
        }
        Some(WifiCredentials {
            ssid: self.ssid.clone(),
            password: self.password.clone(),
        })
    }

    /// Write the console text for `prompt`
    pub fn write_prompt(&self, prompt: Prompt, out: &mut impl Write) -> fmt::Result {
        match prompt {
            Prompt::EnterSsid => out.write_str("Please enter WiFi SSID:\r\n"),
            Prompt::ConfirmSsid => {
                write!(out, "SSID: {}\r\nSSID Correct? (Y/N):\r\n", self.ssid)
            }
            Prompt::EnterPassword => out.write_str("Please enter WiFi Password:\r\n"),
            Prompt::ConfirmPassword => write!(
                out,
                "Password: {}\r\nPassword Correct? (Y/N):\r\n",
                self.password
            ),
            Prompt::Finished => out.write_str("WiFi credentials accepted.\r\n"),
        }
    }
}

/// Append a printable ASCII byte; overflow past capacity is dropped
fn push_byte<const N: usize>(field: &mut String<N>, byte: u8) {
    if byte.is_ascii_graphic() || byte == b' ' {
        let _ = field.push(char::from(byte));
    }
}

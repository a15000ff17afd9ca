//! Minimal HTTP/1.1 front for the control page
//!
//! Transport is left to the host: it hands over the request head it read
//! from the socket and streams out whatever [`respond`] writes.

use core::fmt::{self, Write};

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::page::render_page;
use crate::route::Route;
use crate::service::LampService;

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Unknown",
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "PATCH" => Self::Patch,
            "OPTIONS" => Self::Options,
            _ => return None,
        })
    }
}

/// Parse the request line from the header string.
///
/// Returns the method and the path.
pub fn parse_request_line(head: &str) -> Option<(HttpMethod, &str)> {
    let line_end = head.find("\r\n").unwrap_or(head.len());
    let mut parts = head[..line_end].split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let path = parts.next()?;
    Some((method, path))
}

/// Response status line and headers
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeaders {
    status: StatusCode,
    content_length: usize,
    html: bool,
}

impl ResponseHeaders {
    pub const fn from_code(status: StatusCode) -> Self {
        Self {
            status,
            content_length: 0,
            html: false,
        }
    }

    pub const fn success() -> Self {
        Self::from_code(200)
    }

    pub const fn not_found() -> Self {
        Self::from_code(404)
    }

    pub const fn method_not_allowed() -> Self {
        Self::from_code(405)
    }

    pub const fn bad_request() -> Self {
        Self::from_code(400)
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Mark the body as UTF-8 HTML of the given length
    #[must_use]
    pub const fn with_html(mut self, length: usize) -> Self {
        self.html = true;
        self.content_length = length;
        self
    }

    /// Plain text body of the given length
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.content_length = length;
        self
    }

    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "HTTP/1.1 {} {}\r\n", self.status, reason_phrase(self.status))?;
        if self.html {
            out.write_str("Content-Type: text/html; charset=utf-8\r\n")?;
        } else {
            out.write_str("Content-Type: text/plain\r\n")?;
        }
        write!(out, "Content-Length: {}\r\n", self.content_length)?;
        out.write_str("Connection: close\r\n\r\n")
    }
}

/// Counts bytes written through it
#[derive(Debug, Default)]
struct LengthCounter(usize);

impl Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Serve one request
///
/// `head` holds at least the request line. The matching lamp operation runs
/// before the page is rendered, so the response always shows the state the
/// request produced. Returns the status code that was sent.
pub fn respond<D, const N: usize, const SIZE: usize>(
    service: &mut LampService<'_, D, N, SIZE>,
    head: &str,
    now: Instant,
    out: &mut impl Write,
) -> Result<StatusCode, fmt::Error>
where
    D: OutputDriver,
{
    let Some((method, path)) = parse_request_line(head) else {
        return write_plain(out, ResponseHeaders::bad_request(), "Bad Request");
    };
    if method != HttpMethod::Get {
        return write_plain(out, ResponseHeaders::method_not_allowed(), "Method Not Allowed");
    }
    let Some(route) = Route::parse(path) else {
        #[cfg(feature = "esp32-log")]
        println!("http: unknown route {}", path);
        return write_plain(out, ResponseHeaders::not_found(), "Not Found");
    };

    let view = service.dispatch(route, now);

    let mut counter = LengthCounter::default();
    render_page(&view, &mut counter)?;
    let headers = ResponseHeaders::success().with_html(counter.0);
    headers.write_to(out)?;
    render_page(&view, out)?;
    Ok(headers.status())
}

fn write_plain(
    out: &mut impl Write,
    headers: ResponseHeaders,
    body: &str,
) -> Result<StatusCode, fmt::Error> {
    let headers = headers.with_length(body.len());
    headers.write_to(out)?;
    out.write_str(body)?;
    Ok(headers.status())
}

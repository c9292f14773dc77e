//! Optional diagnostic mirror of outgoing requests and incoming statuses.
//!
//! A [`DebugLogger`] is handed to the client at construction time. It only
//! observes traffic; nothing it does can change a request's outcome.

use std::io::Write;

use reqwest::header::HeaderMap;

use crate::client::API_KEY_HEADER;

/// Receives one diagnostic line per event.
pub trait DebugLogger: Send + Sync {
    fn log(&self, line: &str);
}

/// Writes `[marketparser] <date> <time> <line>` to standard output.
#[derive(Debug, Clone)]
pub struct StdoutLogger {
    prefix: String,
}

impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutLogger {
    pub fn new() -> Self {
        Self::with_prefix("[marketparser] ")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn format_line(&self, line: &str) -> String {
        format!(
            "{}{} {}",
            self.prefix,
            chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
            line
        )
    }
}

impl DebugLogger for StdoutLogger {
    fn log(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // Write errors on stdout are ignored; the mirror is best-effort.
        let _ = writeln!(out, "{}", self.format_line(line));
    }
}

/// Forwards diagnostic lines to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DebugLogger for TracingLogger {
    fn log(&self, line: &str) {
        tracing::debug!(target: "marketparser::wire", "{}", line);
    }
}

/// Renders headers for diagnostics with the API key masked.
pub(crate) fn format_headers(headers: &HeaderMap) -> String {
    let parts: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            let shown = if name.as_str().eq_ignore_ascii_case(API_KEY_HEADER) {
                "***".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            format!("{}: {}", name, shown)
        })
        .collect();
    format!("{{{}}}", parts.join(", "))
}

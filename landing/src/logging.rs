//! Console logging for the browser build.
//!
//! `tracing` events are formatted by `tracing-subscriber` and handed to the
//! browser devtools console, one console call per event. Warnings and errors
//! go to `console.warn` / `console.error` so they stand out in devtools.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use crate::config::{self, BRAND_NAME, VERSION};
use crate::error::SiteError;

/// Install the global subscriber. Call once, before mounting.
pub fn init() -> Result<(), SiteError> {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(config::log_level())
        .with_ansi(false)
        // wasm32-unknown-unknown has no system clock
        .without_time()
        .try_init()
        .map_err(|e| SiteError::Logging(e.to_string()))
}

/// Print the styled brand banner to the devtools console.
pub fn print_banner() {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{BRAND_NAME}")),
            &JsValue::from_str("color: #4f46e5; font-size: 18px; font-weight: bold;"),
        );
        web_sys::console::log_2(
            &JsValue::from_str(&format!(
                "%cQuality Logistics & Warehousing Solutions | v{VERSION}"
            )),
            &JsValue::from_str("color: #6b7280;"),
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{BRAND_NAME} v{VERSION}");
}

/// Hands out one [`ConsoleWriter`] per formatted event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(self.level, &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::info_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn writer_picks_level_from_metadata_default() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
    }

    #[test]
    fn writer_buffers_until_dropped() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        write!(writer, "scroll ").unwrap();
        writeln!(writer, "requested").unwrap();
        assert_eq!(writer.line(), "scroll requested");
    }
}

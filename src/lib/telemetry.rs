//! Browser logging. Events are formatted by `tracing-subscriber` and forwarded
//! to the devtools console at a matching severity. Native builds (tests) keep
//! the default no-op subscriber.

use crate::app_lib::config::AppConfig;
use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Unknown levels fall back to `info` instead of silencing everything.
pub fn level_for(log_level: &str) -> Level {
    log_level.trim().parse::<Level>().unwrap_or(Level::INFO)
}

/// Builds the event filter from the configured level.
pub fn filter_for(log_level: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(log_level).into())
        .parse_lossy("")
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
#[cfg(target_arch = "wasm32")]
pub fn init(config: &AppConfig) -> Result<()> {
    use tracing_subscriber::{Registry, fmt, layer::SubscriberExt};

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .with_writer(console::ConsoleMakeWriter);

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(filter_for(&config.log_level));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Installs nothing outside the browser.
///
/// # Errors
///
/// Never fails on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(_config: &AppConfig) -> Result<()> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub(super) struct ConsoleMakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub(super) struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let message = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&message),
                Level::WARN => web_sys::console::warn_1(&message),
                Level::INFO => web_sys::console::info_1(&message),
                _ => web_sys::console::debug_1(&message),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

//! Colorized, tagged diagnostic output.
//!
//! One process-wide [`LogStream`] serialises every line written by the
//! logging macros and by the `log` crate facade:
//!
//! ```text
//! ┌─────────────────────┐
//! │ dprintf! log_tagged!│──┐
//! │ logc_tagged! ...    │  │     ┌───────────────────────────┐
//! └─────────────────────┘  ├────▶│ LogStream                 │──▶ stdout
//! ┌─────────────────────┐  │     │ sink lock (timed) + clock │
//! │ log::info! warn! .. │──┘     └───────────────────────────┘
//! └─────────────────────┘
//! ```
//!
//! Class gating and the `debug-logging` switch happen at compile time in
//! the macros; the stream itself always writes what it is given.

pub mod class;
pub mod color;
pub mod facade;
mod macros;
pub mod stream;

use std::sync::OnceLock;

pub use color::{BaseColor, LogColor, Modifiers};
pub use stream::{LogStream, StreamGuard};

static STREAM: OnceLock<LogStream> = OnceLock::new();

/// Install the process-wide stream.
///
/// Returns `false` if a stream was already installed (explicitly or by a
/// log call that ran first), in which case `stream` is discarded.
pub fn init(stream: LogStream) -> bool {
    STREAM.set(stream).is_ok()
}

/// The process-wide stream, defaulting to stdout with the system clock.
pub fn stream() -> &'static LogStream {
    STREAM.get_or_init(LogStream::stdout)
}

/// Install [`facade::FACILITY_LOGGER`] as the `log` backend.
///
/// On ESP-IDF the native component log level is set to INFO as well, so
/// driver output below that level stays off the console.
pub fn setup(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&facade::FACILITY_LOGGER)?;
    log::set_max_level(level);

    #[cfg(target_os = "espidf")]
    // SAFETY: esp_log_level_set only updates the tag-level cache; the
    // string is a NUL-terminated static.
    unsafe {
        esp_idf_sys::esp_log_level_set(
            c"*".as_ptr(),
            esp_idf_sys::esp_log_level_t_ESP_LOG_INFO,
        );
    }

    Ok(())
}

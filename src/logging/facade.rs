//! `log` crate backend.
//!
//! Routes `log::info!` / `warn!` / `error!` records from drivers, adapters
//! and third-party crates through the process-wide [`LogStream`], so they
//! share its lock with the facility's own macros.
//!
//! ```text
//!   (ts) [target] W message      ← WARNING color
//!   (ts) [target] E message      ← ERROR color
//!   (ts) [target] I message      ← uncolored
//! ```
//!
//! [`LogStream`]: super::stream::LogStream

use log::{Level, Log, Metadata, Record};

use crate::logging::color::{ERROR, WARNING};

pub struct FacilityLogger;

pub static FACILITY_LOGGER: FacilityLogger = FacilityLogger;

const fn level_letter(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'V',
    }
}

impl Log for FacilityLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stream = super::stream();
        let tag = record.target();
        let letter = level_letter(record.level());
        let payload = record.args();
        match record.level() {
            Level::Error => {
                stream.emit_colored_tagged(tag, ERROR, format_args!("{letter} {payload}"));
            }
            Level::Warn => {
                stream.emit_colored_tagged(tag, WARNING, format_args!("{letter} {payload}"));
            }
            _ => stream.emit_tagged(tag, format_args!("{letter} {payload}")),
        }
    }

    fn flush(&self) {
        if let Some(guard) = super::stream().acquire() {
            drop(guard);
        }
    }
}

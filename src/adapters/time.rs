//! System clock adapter for log timestamps.
//!
//! - **`target_os = "espidf"`**: `esp_log_system_timestamp()`, the same
//!   `HH:MM:SS.mmm` string the native ESP-IDF logger prints (wall clock
//!   once SNTP has set it, time since boot before that).
//! - **`not(target_os = "espidf")`**: uptime of the process from
//!   `std::time::Instant`, in the same format.

use crate::app::ports::{Clock, Timestamp};

pub struct SystemClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(target_os = "espidf")]
impl Clock for SystemClock {
    fn timestamp(&self) -> Timestamp {
        let mut out = Timestamp::new();
        // SAFETY: returns a pointer to a NUL-terminated buffer owned by the
        // log component; copied out immediately.
        let raw = unsafe { esp_idf_sys::esp_log_system_timestamp() };
        if raw.is_null() {
            return out;
        }
        let text = unsafe { core::ffi::CStr::from_ptr(raw) };
        for c in text.to_string_lossy().chars() {
            if out.push(c).is_err() {
                break;
            }
        }
        out
    }
}

#[cfg(not(target_os = "espidf"))]
impl Clock for SystemClock {
    fn timestamp(&self) -> Timestamp {
        format_uptime(self.start.elapsed().as_millis() as u64)
    }
}

/// `HH:MM:SS.mmm`; hours keep counting past 99.
pub fn format_uptime(ms: u64) -> Timestamp {
    use core::fmt::Write as _;

    let mut out = Timestamp::new();
    let (secs, millis) = (ms / 1000, ms % 1000);
    let (mins, secs) = (secs / 60, secs % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    // Cannot overflow: u64 hours need at most 16 digits.
    let _ = write!(out, "{hours:02}:{mins:02}:{secs:02}.{millis:03}");
    out
}

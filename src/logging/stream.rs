//! Mutex-guarded output stream shared by every diagnostic line.
//!
//! A [`LogStream`] owns the character sink, the clock used for timestamp
//! prefixes, and the lock discipline:
//!
//! - The sink lock is taken with a bounded wait. If it cannot be taken
//!   within the timeout the call returns without writing anything.
//! - On ESP-IDF the stream also holds the IDF log lock, the one `ESP_LOGx`
//!   output takes, so driver logs cannot land inside a facility line.
//! - Everything one call writes (color escape, timestamp, tag, payload,
//!   reset, newline) happens under a single acquisition, so concurrent
//!   callers never interleave inside a line.
//! - The lock is released when the [`StreamGuard`] drops, on every path.
//!
//! Once the lock is held a line is written in full, unless the sink itself
//! fails; then the line ends at the failed write.

use core::fmt::{self, Write as _};
use std::io::{self, Write as _};
use std::sync::{Mutex, MutexGuard, TryLockError};
use std::time::{Duration, Instant};

use crate::app::ports::Clock;
use crate::logging::color::{self, LogColor};

/// Default bound on waiting for the sink lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(10);

const LOCK_POLL_INTERVAL: Duration = Duration::from_millis(1);

type Sink = Box<dyn io::Write + Send>;

/// Line prefix written after the color escape.
#[derive(Clone, Copy)]
enum Prefix<'a> {
    None,
    Timestamp,
    Tagged(&'a str),
}

pub struct LogStream {
    sink: Mutex<Sink>,
    clock: Box<dyn Clock + Send + Sync>,
    timestamps: bool,
    lock_timeout: Duration,
}

impl LogStream {
    /// Stream over `sink`, timestamping per the `log-timestamp` feature.
    pub fn new(
        sink: impl io::Write + Send + 'static,
        clock: impl Clock + Send + Sync + 'static,
    ) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
            clock: Box::new(clock),
            timestamps: cfg!(feature = "log-timestamp"),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Console stream: stdout (UART / USB-CDC on the device) and the
    /// system clock.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), crate::adapters::time::SystemClock::new())
    }

    #[must_use]
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    #[must_use]
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps
    }

    pub fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Take the sink lock, waiting at most the configured timeout.
    ///
    /// Returns `None` on timeout. A lock poisoned by a panicking writer is
    /// recovered; the sink itself holds no invariants. A timeout too large
    /// to express as a deadline waits without bound.
    pub fn acquire(&self) -> Option<StreamGuard<'_>> {
        let platform = platform::LogLock::acquire()?;
        let mut deadline = None;
        loop {
            match self.sink.try_lock() {
                Ok(sink) => return Some(StreamGuard { sink, _platform: platform }),
                Err(TryLockError::Poisoned(poisoned)) => {
                    return Some(StreamGuard {
                        sink: poisoned.into_inner(),
                        _platform: platform,
                    });
                }
                Err(TryLockError::WouldBlock) => {
                    let now = Instant::now();
                    let limit = *deadline.get_or_insert_with(|| now.checked_add(self.lock_timeout));
                    if limit.is_some_and(|d| now >= d) {
                        return None;
                    }
                    std::thread::sleep(LOCK_POLL_INTERVAL);
                }
            }
        }
    }

    // ── Emit operations ───────────────────────────────────────

    /// Bare output: the payload exactly as formatted.
    pub fn emit(&self, args: fmt::Arguments<'_>) {
        self.write_line(None, Prefix::None, args, false);
    }

    /// Payload bracketed by `color` and an attribute reset.
    pub fn emit_colored(&self, color: LogColor, args: fmt::Arguments<'_>) {
        self.write_line(Some(color), Prefix::None, args, false);
    }

    /// `(timestamp) ` prefix (when enabled) and a trailing newline.
    pub fn emit_timestamped(&self, args: fmt::Arguments<'_>) {
        self.write_line(None, Prefix::Timestamp, args, true);
    }

    pub fn emit_colored_timestamped(&self, color: LogColor, args: fmt::Arguments<'_>) {
        self.write_line(Some(color), Prefix::Timestamp, args, true);
    }

    /// `(timestamp) [tag] ` prefix and a trailing newline.
    pub fn emit_tagged(&self, tag: &str, args: fmt::Arguments<'_>) {
        self.write_line(None, Prefix::Tagged(tag), args, true);
    }

    pub fn emit_colored_tagged(&self, tag: &str, color: LogColor, args: fmt::Arguments<'_>) {
        self.write_line(Some(color), Prefix::Tagged(tag), args, true);
    }

    fn write_line(
        &self,
        color: Option<LogColor>,
        prefix: Prefix<'_>,
        args: fmt::Arguments<'_>,
        newline: bool,
    ) {
        let Some(mut out) = self.acquire() else {
            return;
        };

        // A failed write ends the line early; the reset still goes out.
        let _ = self.write_body(&mut out, color, prefix, args);
        if color.is_some() {
            let _ = color::write_color(&mut out, LogColor::Normal);
        }
        if newline {
            let _ = out.write_char('\n');
        }
    }

    fn write_body(
        &self,
        out: &mut StreamGuard<'_>,
        color: Option<LogColor>,
        prefix: Prefix<'_>,
        args: fmt::Arguments<'_>,
    ) -> fmt::Result {
        if let Some(color) = color {
            color::write_color(out, color)?;
        }
        match prefix {
            Prefix::None => {}
            Prefix::Timestamp => self.write_timestamp(out)?,
            Prefix::Tagged(tag) => {
                self.write_timestamp(out)?;
                write!(out, "[{tag}] ")?;
            }
        }
        out.write_fmt(args)
    }

    fn write_timestamp(&self, out: &mut StreamGuard<'_>) -> fmt::Result {
        if self.timestamps {
            write!(out, "({}) ", self.clock.timestamp())?;
        }
        Ok(())
    }
}

/// Exclusive access to the sink; releases the lock on drop.
pub struct StreamGuard<'a> {
    sink: MutexGuard<'a, Sink>,
    // Dropped after `sink`.
    _platform: platform::LogLock,
}

impl fmt::Write for StreamGuard<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl Drop for StreamGuard<'_> {
    fn drop(&mut self) {
        let _ = self.sink.flush();
    }
}

/// The ESP-IDF log lock shared with `ESP_LOGx`.
#[cfg(target_os = "espidf")]
mod platform {
    // Private IDF API (`esp_private/log_lock.h`), not in the generated bindings.
    unsafe extern "C" {
        fn esp_log_impl_lock_timeout() -> bool;
        fn esp_log_impl_unlock();
    }

    pub struct LogLock(());

    impl LogLock {
        /// Waits up to the IDF's own bound (10 ticks).
        pub fn acquire() -> Option<Self> {
            // SAFETY: takes the IDF log mutex; released exactly once in `drop`.
            unsafe { esp_log_impl_lock_timeout() }.then_some(Self(()))
        }
    }

    impl Drop for LogLock {
        fn drop(&mut self) {
            // SAFETY: only constructed after a successful lock.
            unsafe { esp_log_impl_unlock() }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
mod platform {
    /// No platform logger to share with on the host.
    pub struct LogLock;

    impl LogLock {
        #[allow(clippy::unnecessary_wraps)]
        pub fn acquire() -> Option<Self> {
            Some(Self)
        }
    }
}

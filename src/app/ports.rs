//! Port traits: the boundary between the sweep logic / logging facility
//! and the platform.
//!
//! ```text
//!   Sequencer ──▶ PwmPort ──▶ LedcPwm (LEDC registers)
//!   LogStream ──▶ Clock   ──▶ SystemClock (esp_log timestamp / uptime)
//! ```
//!
//! Pacing between commits goes through `embedded_hal::delay::DelayNs`
//! rather than a port of our own.

use crate::app::sequence::Channel;
use crate::error::PwmError;

// ───────────────────────────────────────────────────────────────
// PWM port (domain → peripheral)
// ───────────────────────────────────────────────────────────────

/// Two-phase duty control for the three LED channels.
///
/// [`set_duty`](Self::set_duty) stages a value; it has no visible effect
/// on the output until [`commit`](Self::commit) is called for the same
/// channel.
pub trait PwmPort {
    /// Largest accepted duty value (the resolution count).
    fn max_duty(&self) -> u32;

    /// Stage `duty` for `channel`. Values above [`max_duty`](Self::max_duty)
    /// are rejected with [`PwmError::DutyOutOfRange`].
    fn set_duty(&mut self, channel: Channel, duty: u32) -> Result<(), PwmError>;

    /// Make the staged duty of `channel` take effect.
    fn commit(&mut self, channel: Channel) -> Result<(), PwmError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (platform → logging)
// ───────────────────────────────────────────────────────────────

/// Short human-readable timestamp, e.g. `00:01:23.456`.
pub type Timestamp = heapless::String<24>;

pub trait Clock {
    fn timestamp(&self) -> Timestamp;
}

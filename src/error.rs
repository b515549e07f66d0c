//! Unified error types for the floodlight firmware.
//!
//! Every subsystem error converts into [`Error`], keeping `main`'s handling
//! uniform. All variants are `Copy`.

use core::fmt;

use crate::app::sequence::Channel;
use crate::app::sequencer::SequencerError;
use crate::config::ConfigError;
use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A PWM duty write or commit failed.
    Pwm(PwmError),
    /// The sequencer stopped on an unacknowledged peripheral error.
    Sequencer(SequencerError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pwm(e) => write!(f, "pwm: {e}"),
            Self::Sequencer(e) => write!(f, "sequencer: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<PwmError> for Error {
    fn from(e: PwmError) -> Self {
        Self::Pwm(e)
    }
}

impl From<SequencerError> for Error {
    fn from(e: SequencerError) -> Self {
        Self::Sequencer(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// PWM errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Requested duty exceeds the channel's resolution count.
    DutyOutOfRange { channel: Channel, duty: u32, max: u32 },
    /// The LEDC driver rejected the call (`esp_err_t`).
    Driver { channel: Channel, code: i32 },
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DutyOutOfRange { channel, duty, max } => {
                write!(f, "{channel} duty {duty} exceeds {max}")
            }
            Self::Driver { channel, code } => {
                write!(f, "{channel} LEDC driver error (rc={code})")
            }
        }
    }
}

impl std::error::Error for PwmError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

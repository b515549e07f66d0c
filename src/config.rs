//! Floodlight configuration.
//!
//! Defaults reproduce the shipped board: 8-bit LEDC at 10 kHz, ramps of
//! sixteen steps, 30 ms per red step. Wi-Fi credentials are baked in at
//! build time from `WIFI_SSID` / `WIFI_PASSWORD` (see `build.rs`).
//!
//! A JSON document in the `FLOODLIGHT_CONFIG` build environment variable
//! overrides any subset of fields:
//!
//! ```text
//! FLOODLIGHT_CONFIG='{"resolution_bits":10,"step_delay_ms":15}' cargo build
//! ```

use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

/// LEDC source clock on the ESP32-C3 (APB, 80 MHz).
pub const LEDC_SOURCE_CLOCK_HZ: u64 = 80_000_000;

/// Widest duty resolution the low-speed LEDC timers accept.
pub const MAX_RESOLUTION_BITS: u8 = 14;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Override JSON did not parse.
    Malformed { line: usize, column: usize },
    /// A field is out of range.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { line, column } => {
                write!(f, "malformed config JSON at {line}:{column}")
            }
            Self::ValidationFailed(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloodlightConfig {
    // --- Wi-Fi station ---
    pub wifi_ssid: heapless::String<32>,
    /// Empty for an open network, otherwise WPA2 passphrase (8–63) or PSK (64 hex).
    pub wifi_password: heapless::String<64>,

    // --- LEDC ---
    /// Duty resolution; the ramp maximum is `1 << resolution_bits`.
    pub resolution_bits: u8,
    pub pwm_frequency_hz: u32,

    // --- Sweep ---
    /// Steps per ramp; the increment is `resolution_count / step_divisor`.
    pub step_divisor: u32,
    /// Delay after each red step.
    pub step_delay_ms: u32,

    // --- Logging ---
    /// Longest wait for the console lock before a line is dropped.
    pub log_lock_timeout_ms: u32,
}

impl Default for FloodlightConfig {
    fn default() -> Self {
        Self {
            wifi_ssid: truncated(env!("WIFI_SSID")),
            wifi_password: truncated(env!("WIFI_PASSWORD")),
            resolution_bits: 8,
            pwm_frequency_hz: 10_000,
            step_divisor: 16,
            step_delay_ms: 30,
            log_lock_timeout_ms: 10,
        }
    }
}

impl FloodlightConfig {
    /// Number of duty counts; also the largest duty the sweep writes.
    pub const fn resolution_count(&self) -> u32 {
        1 << self.resolution_bits
    }

    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms as u64)
    }

    pub const fn log_lock_timeout(&self) -> Duration {
        Duration::from_millis(self.log_lock_timeout_ms as u64)
    }

    /// Defaults overlaid with `json`, validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ConfigError::Malformed {
            line: e.line(),
            column: e.column(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build-time configuration: defaults, or the `FLOODLIGHT_CONFIG` override.
    pub fn load() -> Result<Self, ConfigError> {
        match option_env!("FLOODLIGHT_CONFIG") {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => {
                let cfg = Self::default();
                cfg.validate()?;
                Ok(cfg)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RESOLUTION_BITS).contains(&self.resolution_bits) {
            return Err(ConfigError::ValidationFailed(
                "resolution_bits must be 1–14",
            ));
        }
        if !(1..=40_000).contains(&self.pwm_frequency_hz) {
            return Err(ConfigError::ValidationFailed(
                "pwm_frequency_hz must be 1–40000",
            ));
        }
        if u64::from(self.pwm_frequency_hz) * u64::from(self.resolution_count())
            > LEDC_SOURCE_CLOCK_HZ
        {
            return Err(ConfigError::ValidationFailed(
                "pwm_frequency_hz × resolution count exceeds the 80 MHz LEDC clock",
            ));
        }
        if self.step_divisor == 0 {
            return Err(ConfigError::ValidationFailed("step_divisor must be ≥ 1"));
        }
        if !(1..=10_000).contains(&self.step_delay_ms) {
            return Err(ConfigError::ValidationFailed(
                "step_delay_ms must be 1–10000",
            ));
        }
        if !(1..=1_000).contains(&self.log_lock_timeout_ms) {
            return Err(ConfigError::ValidationFailed(
                "log_lock_timeout_ms must be 1–1000",
            ));
        }
        if !self.wifi_ssid.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            return Err(ConfigError::ValidationFailed(
                "wifi_ssid must be printable ASCII",
            ));
        }
        let pw = self.wifi_password.len();
        if pw != 0 && pw < 8 {
            return Err(ConfigError::ValidationFailed(
                "wifi_password must be empty or 8–64 characters",
            ));
        }
        Ok(())
    }
}

/// Longest prefix of `s` that fits in `N` bytes, on a char boundary.
fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

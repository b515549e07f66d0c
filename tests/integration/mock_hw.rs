//! Mock hardware for integration tests.
//!
//! Records every PWM call and every delay so tests can assert on the full
//! command history without touching LEDC registers, and provides an
//! in-memory console sink with a fixed clock for the logging facility.

use std::io;
use std::sync::{Arc, Mutex};

use embedded_hal::delay::DelayNs;
use floodlight::app::ports::{Clock, PwmPort, Timestamp};
use floodlight::app::sequence::Channel;
use floodlight::error::PwmError;

// ── PWM call record ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmCall {
    SetDuty { channel: Channel, duty: u32 },
    Commit { channel: Channel },
}

// ── MockPwm ───────────────────────────────────────────────────

pub struct MockPwm {
    pub max: u32,
    pub calls: Vec<PwmCall>,
    staged: [u32; Channel::COUNT],
    output: [u32; Channel::COUNT],
    /// Fail the n-th commit (0-based) with a driver error.
    fail_commit_at: Option<usize>,
    commits: usize,
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new(max: u32) -> Self {
        Self {
            max,
            calls: Vec::new(),
            staged: [0; Channel::COUNT],
            output: [0; Channel::COUNT],
            fail_commit_at: None,
            commits: 0,
        }
    }

    pub fn failing_commit_at(max: u32, n: usize) -> Self {
        Self {
            fail_commit_at: Some(n),
            ..Self::new(max)
        }
    }

    pub fn output(&self, channel: Channel) -> u32 {
        self.output[channel.index()]
    }

    /// Committed `(channel, duty)` pairs in order.
    pub fn commits(&self) -> Vec<(Channel, u32)> {
        let mut staged = [0u32; Channel::COUNT];
        let mut out = Vec::new();
        for call in &self.calls {
            match *call {
                PwmCall::SetDuty { channel, duty } => staged[channel.index()] = duty,
                PwmCall::Commit { channel } => out.push((channel, staged[channel.index()])),
            }
        }
        out
    }

    /// Committed duties of one channel, in order.
    pub fn commits_for(&self, channel: Channel) -> Vec<u32> {
        self.commits()
            .into_iter()
            .filter(|&(ch, _)| ch == channel)
            .map(|(_, duty)| duty)
            .collect()
    }
}

impl PwmPort for MockPwm {
    fn max_duty(&self) -> u32 {
        self.max
    }

    fn set_duty(&mut self, channel: Channel, duty: u32) -> Result<(), PwmError> {
        if duty > self.max {
            return Err(PwmError::DutyOutOfRange {
                channel,
                duty,
                max: self.max,
            });
        }
        self.calls.push(PwmCall::SetDuty { channel, duty });
        self.staged[channel.index()] = duty;
        Ok(())
    }

    fn commit(&mut self, channel: Channel) -> Result<(), PwmError> {
        let n = self.commits;
        self.commits += 1;
        if self.fail_commit_at == Some(n) {
            return Err(PwmError::Driver { channel, code: 0x103 });
        }
        self.calls.push(PwmCall::Commit { channel });
        self.output[channel.index()] = self.staged[channel.index()];
        Ok(())
    }
}

// ── RecordingDelay ────────────────────────────────────────────

/// Delay that returns immediately and remembers what was asked of it.
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
    }
}

// ── Console capture ───────────────────────────────────────────

/// Cloneable in-memory sink; clones share the buffer.
#[derive(Clone, Default)]
pub struct SharedSink(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl SharedSink {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl io::Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn timestamp(&self) -> Timestamp {
        Timestamp::try_from(self.0).unwrap()
    }
}

/// Remove ANSI escape sequences (`ESC [ … m`).
#[allow(dead_code)]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1B' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

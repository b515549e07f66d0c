//! Sequencer: drains the [`SweepSequence`] into a [`PwmPort`] with pacing.
//!
//! Each command is staged with `set_duty` and made visible with `commit`.
//! Paced commands are followed by one step delay, the only point where the
//! sequencing task yields. A failed write or commit is never retried: the
//! run ends with a [`SequencerError`] after an `ERROR` diagnostic.

use core::convert::Infallible;
use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::app::ports::PwmPort;
use crate::app::sequence::{Channel, Command, Ramp, SweepSequence};
use crate::error::PwmError;
use crate::{log_tagged, logc_tagged};

/// Unrecoverable peripheral failure that halted sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerError {
    pub channel: Channel,
    pub duty: u32,
    pub source: PwmError,
}

impl fmt::Display for SequencerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "halted writing {} = {}: {}",
            self.channel, self.duty, self.source
        )
    }
}

impl std::error::Error for SequencerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub struct Sequencer<P, D> {
    port: P,
    delay: D,
    sequence: SweepSequence,
    step_delay_ms: u32,
}

impl<P: PwmPort, D: DelayNs> Sequencer<P, D> {
    /// Sweep over `0..=port.max_duty()` in `step_divisor` steps per ramp.
    pub fn new(port: P, delay: D, step_delay_ms: u32, step_divisor: u32) -> Self {
        let ramp = Ramp::from_divisor(port.max_duty(), step_divisor);
        Self::with_ramp(port, delay, step_delay_ms, ramp)
    }

    pub fn with_ramp(port: P, delay: D, step_delay_ms: u32, ramp: Ramp) -> Self {
        Self {
            port,
            delay,
            sequence: SweepSequence::new(ramp),
            step_delay_ms,
        }
    }

    pub fn sequence(&self) -> &SweepSequence {
        &self.sequence
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_parts(self) -> (P, D) {
        (self.port, self.delay)
    }

    /// Execute one command: stage, commit, pace.
    pub fn step(&mut self) -> Result<Command, SequencerError> {
        let cmd = self.sequence.advance();
        let fail = |source: PwmError| SequencerError {
            channel: cmd.channel,
            duty: cmd.duty,
            source,
        };

        self.port.set_duty(cmd.channel, cmd.duty).map_err(fail)?;
        self.port.commit(cmd.channel).map_err(fail)?;

        if cmd.pace {
            self.delay.delay_ms(self.step_delay_ms);
        }

        if cmd.channel == Channel::Blue && self.sequence.at_lap_start() {
            log_tagged!(BACKGROUND, "sweep lap {} done", self.sequence.laps_completed());
        }

        Ok(cmd)
    }

    /// Execute `count` commands, stopping at the first failure.
    pub fn run_for(&mut self, count: usize) -> Result<(), SequencerError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Sequence forever. Returns only when the peripheral reports an error.
    pub fn run(&mut self) -> Result<Infallible, SequencerError> {
        loop {
            if let Err(e) = self.step() {
                logc_tagged!(TASK, crate::logging::color::ERROR, "sequencer stopped: {e}");
                return Err(e);
            }
        }
    }
}

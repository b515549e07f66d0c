//! Color sweep as a lazy, infinite sequence of duty commands.
//!
//! Three nested ramps, outer to inner blue → green → red. Every level of a
//! ramp is committed once; after a full inner pass the inner channel is
//! zeroed before the enclosing ramp advances.
//!
//! ```text
//!   SetBlue ──▶ SetGreen ──▶ SetRed ◀─┐
//!      ▲           ▲           │      │ next red level
//!      │           │           ├──────┘
//!      │           │           ▼ red at max
//!      │           └──────── ResetRed
//!      │    next green level   │
//!      │                       ▼ green at max
//!      └──────────────────  ResetGreen
//!      │    next blue level    │
//!      │                       ▼ blue at max
//!      └────── lap + 1 ───── ResetBlue
//! ```
//!
//! Only red steps carry a pacing delay; resets and outer-channel writes go
//! out back to back with the step that precedes them.

use core::fmt;
use core::iter;

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// One of the three LED color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    pub const COUNT: usize = 3;
    pub const ALL: [Self; Self::COUNT] = [Self::Red, Self::Green, Self::Blue];

    /// Position in per-channel arrays; matches the LEDC channel number.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        })
    }
}

// ---------------------------------------------------------------------------
// Ramp
// ---------------------------------------------------------------------------

/// Levels `0, inc, 2·inc, …` up to and always including `max`.
///
/// When `max` is not a multiple of the increment the last step is short:
/// `max = 255, inc = 16` ends `…, 224, 240, 255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    max: u32,
    increment: u32,
}

impl Ramp {
    /// An increment of zero is raised to 1 so the ramp always terminates.
    pub const fn new(max: u32, increment: u32) -> Self {
        Self {
            max,
            increment: if increment == 0 { 1 } else { increment },
        }
    }

    /// Ramp whose increment is `max / divisor`.
    pub const fn from_divisor(max: u32, divisor: u32) -> Self {
        let divisor = if divisor == 0 { 1 } else { divisor };
        Self::new(max, max / divisor)
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn increment(&self) -> u32 {
        self.increment
    }

    /// Level following `level`, or `None` once `max` has been reached.
    pub fn next_after(&self, level: u32) -> Option<u32> {
        if level >= self.max {
            None
        } else {
            Some(level.saturating_add(self.increment).min(self.max))
        }
    }

    /// All levels of one pass.
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        iter::successors(Some(0), |&level| self.next_after(level))
    }

    /// Number of levels in one pass.
    pub fn len(&self) -> usize {
        self.max.div_ceil(self.increment) as usize + 1
    }

    /// Always `false`: a pass contains at least level 0.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Stage `duty` on `channel`, commit it, then wait one step if `pace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub channel: Channel,
    pub duty: u32,
    pub pace: bool,
}

impl Command {
    const fn set(channel: Channel, duty: u32) -> Self {
        Self {
            channel,
            duty,
            pace: false,
        }
    }

    const fn step(channel: Channel, duty: u32) -> Self {
        Self {
            channel,
            duty,
            pace: true,
        }
    }

    const fn reset(channel: Channel) -> Self {
        Self::set(channel, 0)
    }
}

// ---------------------------------------------------------------------------
// Sweep state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SetBlue,
    SetGreen,
    SetRed,
    ResetRed,
    ResetGreen,
    ResetBlue,
}

/// The endless blue/green/red sweep.
///
/// Implements [`Iterator`] and never returns `None`. Every lap (one full
/// blue pass) yields the same commands.
#[derive(Debug, Clone)]
pub struct SweepSequence {
    ramp: Ramp,
    phase: Phase,
    blue: u32,
    green: u32,
    red: u32,
    laps: u64,
}

impl SweepSequence {
    pub fn new(ramp: Ramp) -> Self {
        Self {
            ramp,
            phase: Phase::SetBlue,
            blue: 0,
            green: 0,
            red: 0,
            laps: 0,
        }
    }

    pub fn ramp(&self) -> Ramp {
        self.ramp
    }

    /// Full blue passes finished so far.
    pub fn laps_completed(&self) -> u64 {
        self.laps
    }

    /// Commands in one lap, `n·(n·(n+2)+2)+1` for `n` ramp levels.
    ///
    /// Grows with the cube of `n`, so it is counted in `u64` and saturates.
    pub fn lap_len(&self) -> u64 {
        let n = self.ramp.len() as u64;
        n.saturating_mul(n.saturating_mul(n + 2).saturating_add(2))
            .saturating_add(1)
    }

    /// `true` when the next command starts a new lap.
    pub fn at_lap_start(&self) -> bool {
        self.phase == Phase::SetBlue && self.blue == 0
    }

    /// Produce the next command and advance.
    pub fn advance(&mut self) -> Command {
        match self.phase {
            Phase::SetBlue => {
                self.phase = Phase::SetGreen;
                Command::set(Channel::Blue, self.blue)
            }
            Phase::SetGreen => {
                self.red = 0;
                self.phase = Phase::SetRed;
                Command::set(Channel::Green, self.green)
            }
            Phase::SetRed => {
                let cmd = Command::step(Channel::Red, self.red);
                match self.ramp.next_after(self.red) {
                    Some(next) => self.red = next,
                    None => self.phase = Phase::ResetRed,
                }
                cmd
            }
            Phase::ResetRed => {
                match self.ramp.next_after(self.green) {
                    Some(next) => {
                        self.green = next;
                        self.phase = Phase::SetGreen;
                    }
                    None => self.phase = Phase::ResetGreen,
                }
                Command::reset(Channel::Red)
            }
            Phase::ResetGreen => {
                match self.ramp.next_after(self.blue) {
                    Some(next) => {
                        self.blue = next;
                        self.green = 0;
                        self.phase = Phase::SetBlue;
                    }
                    None => self.phase = Phase::ResetBlue,
                }
                Command::reset(Channel::Green)
            }
            Phase::ResetBlue => {
                self.blue = 0;
                self.green = 0;
                self.laps += 1;
                self.phase = Phase::SetBlue;
                Command::reset(Channel::Blue)
            }
        }
    }
}

impl Iterator for SweepSequence {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

//! Sequencer against the mock PWM: ramp shape, reset ordering, pacing and
//! halting on peripheral errors.

use floodlight::app::ports::PwmPort;
use floodlight::app::sequence::{Channel, Ramp};
use floodlight::app::sequencer::{Sequencer, SequencerError};
use floodlight::drivers::ledc::LedcPwm;
use floodlight::error::PwmError;

use crate::mock_hw::{MockPwm, PwmCall, RecordingDelay};

const STEP_MS: u32 = 30;

fn sequencer(max: u32) -> Sequencer<MockPwm, RecordingDelay> {
    Sequencer::new(MockPwm::new(max), RecordingDelay::default(), STEP_MS, 16)
}

fn run_laps(seq: &mut Sequencer<MockPwm, RecordingDelay>, laps: usize) {
    let len = seq.sequence().lap_len() as usize;
    seq.run_for(len * laps).unwrap();
}

// ── Ramp shape ────────────────────────────────────────────────

#[test]
fn first_red_pass_is_0_to_256_then_reset() {
    let mut seq = sequencer(256);
    seq.run_for(2 + 17 + 1).unwrap();

    let red = seq.port().commits_for(Channel::Red);
    let expected: Vec<u32> = (0..=256).step_by(16).chain([0]).collect();
    assert_eq!(red.len(), 18);
    assert_eq!(red, expected);
}

#[test]
fn uneven_resolution_still_reaches_max() {
    let mut seq = Sequencer::with_ramp(
        MockPwm::new(255),
        RecordingDelay::default(),
        STEP_MS,
        Ramp::new(255, 16),
    );
    let n = seq.sequence().ramp().len();
    seq.run_for(2 + n + 1).unwrap();

    let red = seq.port().commits_for(Channel::Red);
    assert_eq!(&red[n - 3..], &[224, 240, 255, 0]);
}

#[test]
fn blue_and_green_are_set_before_red_starts() {
    let mut seq = sequencer(256);
    seq.run_for(3).unwrap();
    assert_eq!(
        seq.port().commits(),
        vec![(Channel::Blue, 0), (Channel::Green, 0), (Channel::Red, 0)]
    );
}

// ── Reset ordering ────────────────────────────────────────────

#[test]
fn inner_channel_zeroed_before_outer_advances() {
    let mut seq = sequencer(64);
    run_laps(&mut seq, 1);
    let max = 64;
    let commits = seq.port().commits();

    // A completed red pass is followed by the red reset.
    for pair in commits.windows(2) {
        if pair[0] == (Channel::Red, max) {
            assert_eq!(pair[1], (Channel::Red, 0));
        }
    }

    for i in 1..commits.len() {
        let (ch, duty) = commits[i];
        if ch == Channel::Green && duty > 0 {
            assert_eq!(commits[i - 1], (Channel::Red, 0), "green advanced at {i} without red reset");
        }
        if ch == Channel::Blue && duty > 0 {
            assert_eq!(commits[i - 1], (Channel::Green, 0), "blue advanced at {i} without green reset");
        }
    }
}

#[test]
fn lap_ends_with_all_channels_dark() {
    let mut seq = sequencer(32);
    run_laps(&mut seq, 1);
    let pwm = seq.port();
    for ch in Channel::ALL {
        assert_eq!(pwm.output(ch), 0, "{ch} left on after lap");
    }
    assert_eq!(seq.sequence().laps_completed(), 1);
}

// ── Range + repetition ────────────────────────────────────────

#[test]
fn every_commit_within_resolution() {
    let mut seq = sequencer(256);
    run_laps(&mut seq, 1);
    assert!(seq.port().commits().iter().all(|&(_, d)| d <= 256));
    assert_eq!(seq.port().commits().len(), 5526);
}

#[test]
fn laps_are_identical() {
    let mut seq = sequencer(48);
    let len = seq.sequence().lap_len() as usize;
    run_laps(&mut seq, 3);
    let commits = seq.port().commits();
    assert_eq!(commits.len(), len * 3);
    assert_eq!(commits[..len], commits[len..2 * len]);
    assert_eq!(commits[len..2 * len], commits[2 * len..]);
}

#[test]
fn every_set_is_followed_by_its_commit() {
    let mut seq = sequencer(32);
    run_laps(&mut seq, 1);
    let calls = &seq.port().calls;
    assert_eq!(calls.len() % 2, 0);
    for pair in calls.chunks(2) {
        match (pair[0], pair[1]) {
            (PwmCall::SetDuty { channel, .. }, PwmCall::Commit { channel: c }) => {
                assert_eq!(channel, c);
            }
            other => panic!("unexpected call pair {other:?}"),
        }
    }
}

// ── Pacing ────────────────────────────────────────────────────

#[test]
fn one_delay_per_red_step() {
    let mut seq = sequencer(64);
    let n = seq.sequence().ramp().len();
    run_laps(&mut seq, 1);
    let (_, delay) = seq.into_parts();
    assert_eq!(delay.calls, n * n * n);
    assert_eq!(delay.total_ns, (n * n * n) as u64 * u64::from(STEP_MS) * 1_000_000);
}

// ── Failures ──────────────────────────────────────────────────

#[test]
fn commit_failure_halts_run() {
    let mut seq = Sequencer::new(
        MockPwm::failing_commit_at(256, 5),
        RecordingDelay::default(),
        STEP_MS,
        16,
    );

    let Err(err) = seq.run();
    assert_eq!(
        err,
        SequencerError {
            channel: Channel::Red,
            duty: 48,
            source: PwmError::Driver {
                channel: Channel::Red,
                code: 0x103
            },
        }
    );

    // Nothing written after the failing commit.
    let calls = seq.port().calls.clone();
    assert_eq!(calls.last(), Some(&PwmCall::SetDuty { channel: Channel::Red, duty: 48 }));
    let (_, delay) = seq.into_parts();
    assert_eq!(delay.calls, 3);
}

#[test]
fn duty_beyond_port_range_is_an_error() {
    let mut seq = Sequencer::with_ramp(
        MockPwm::new(100),
        RecordingDelay::default(),
        STEP_MS,
        Ramp::new(200, 50),
    );
    let err = seq.run_for(10).unwrap_err();
    assert_eq!(err.channel, Channel::Red);
    assert_eq!(err.duty, 150);
    assert!(matches!(err.source, PwmError::DutyOutOfRange { max: 100, .. }));
    assert!(err.to_string().contains("red = 150"));
}

// ── Host LEDC simulator ───────────────────────────────────────

#[test]
fn ledc_sim_tracks_committed_output() {
    let mut seq = Sequencer::new(LedcPwm::new(256), RecordingDelay::default(), STEP_MS, 16);
    assert_eq!(seq.port().max_duty(), 256);
    seq.run_for(2 + 5).unwrap();
    let pwm = seq.port();
    assert_eq!(pwm.output(Channel::Blue), 0);
    assert_eq!(pwm.output(Channel::Green), 0);
    assert_eq!(pwm.output(Channel::Red), 64);
}

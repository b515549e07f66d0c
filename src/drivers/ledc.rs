//! LEDC PWM driver for the three color channels.
//!
//! - **`target_os = "espidf"`**: `ledc_set_duty` stages the value in the
//!   channel's duty register, `ledc_update_duty` latches it at the next PWM
//!   period.
//! - **host**: a simulator keeping staged and committed duty per channel,
//!   so tests can observe that nothing changes before a commit.

use crate::app::ports::PwmPort;
use crate::app::sequence::Channel;
use crate::error::PwmError;

#[cfg(target_os = "espidf")]
use crate::pins;

pub struct LedcPwm {
    max_duty: u32,
    #[cfg(not(target_os = "espidf"))]
    staged: [u32; Channel::COUNT],
    #[cfg(not(target_os = "espidf"))]
    committed: [u32; Channel::COUNT],
}

impl LedcPwm {
    /// Driver for channels configured by
    /// [`init_ledc`](super::hw_init::init_ledc) with `resolution_count`
    /// duty counts.
    pub fn new(resolution_count: u32) -> Self {
        Self {
            max_duty: resolution_count,
            #[cfg(not(target_os = "espidf"))]
            staged: [0; Channel::COUNT],
            #[cfg(not(target_os = "espidf"))]
            committed: [0; Channel::COUNT],
        }
    }

    fn check(&self, channel: Channel, duty: u32) -> Result<(), PwmError> {
        if duty > self.max_duty {
            return Err(PwmError::DutyOutOfRange {
                channel,
                duty,
                max: self.max_duty,
            });
        }
        Ok(())
    }
}

// ── Device ────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn esp_result(channel: Channel, rc: esp_idf_sys::esp_err_t) -> Result<(), PwmError> {
    if rc == esp_idf_sys::ESP_OK as i32 {
        Ok(())
    } else {
        Err(PwmError::Driver { channel, code: rc })
    }
}

#[cfg(target_os = "espidf")]
impl PwmPort for LedcPwm {
    fn max_duty(&self) -> u32 {
        self.max_duty
    }

    fn set_duty(&mut self, channel: Channel, duty: u32) -> Result<(), PwmError> {
        self.check(channel, duty)?;
        // SAFETY: channel was configured in init_ledc(); only the sequencer
        // task writes duty registers.
        let rc = unsafe {
            esp_idf_sys::ledc_set_duty(
                esp_idf_sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                pins::ledc_channel(channel),
                duty,
            )
        };
        esp_result(channel, rc)
    }

    fn commit(&mut self, channel: Channel) -> Result<(), PwmError> {
        // SAFETY: as for set_duty.
        let rc = unsafe {
            esp_idf_sys::ledc_update_duty(
                esp_idf_sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                pins::ledc_channel(channel),
            )
        };
        esp_result(channel, rc)
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl LedcPwm {
    /// Duty currently visible on `channel`'s output.
    pub fn output(&self, channel: Channel) -> u32 {
        self.committed[channel.index()]
    }

    /// Duty written but not yet committed (or equal to the output).
    pub fn staged(&self, channel: Channel) -> u32 {
        self.staged[channel.index()]
    }
}

#[cfg(not(target_os = "espidf"))]
impl PwmPort for LedcPwm {
    fn max_duty(&self) -> u32 {
        self.max_duty
    }

    fn set_duty(&mut self, channel: Channel, duty: u32) -> Result<(), PwmError> {
        self.check(channel, duty)?;
        self.staged[channel.index()] = duty;
        Ok(())
    }

    fn commit(&mut self, channel: Channel) -> Result<(), PwmError> {
        let i = channel.index();
        self.committed[i] = self.staged[i];
        Ok(())
    }
}

//! One-shot peripheral initialization.
//!
//! Resets the three LED GPIOs to push-pull outputs and configures the LEDC
//! timer plus one channel per color, all at 0 % duty. Called once from
//! `main()` before the sequencer starts; any failure aborts start-up.

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

use crate::config::FloodlightConfig;
#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed { gpio: i32, rc: i32 },
    LedcTimerFailed(i32),
    LedcChannelFailed { channel: u32, rc: i32 },
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed { gpio, rc } => {
                write!(f, "GPIO{gpio} config failed (rc={rc})")
            }
            Self::LedcTimerFailed(rc) => write!(f, "LEDC timer config failed (rc={rc})"),
            Self::LedcChannelFailed { channel, rc } => {
                write!(f, "LEDC channel {channel} config failed (rc={rc})")
            }
        }
    }
}

impl std::error::Error for HwInitError {}

// ── GPIO ──────────────────────────────────────────────────────

/// Reset the RGB pins and set them as outputs.
#[cfg(target_os = "espidf")]
pub fn init_gpio() -> Result<(), HwInitError> {
    for gpio in pins::RGB_GPIOS {
        // SAFETY: single-threaded init path; pins are board constants.
        let rc = unsafe { gpio_reset_pin(gpio) };
        if rc != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed { gpio, rc });
        }
        let rc = unsafe { gpio_set_direction(gpio, gpio_mode_t_GPIO_MODE_OUTPUT) };
        if rc != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed { gpio, rc });
        }
    }
    log::info!("hw_init: RGB GPIOs reset as outputs");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_gpio() -> Result<(), HwInitError> {
    log::debug!("hw_init(sim): GPIO init skipped");
    Ok(())
}

// ── LEDC PWM ─────────────────────────────────────────────────

/// Configure the shared LEDC timer and the red/green/blue channels.
#[cfg(target_os = "espidf")]
pub fn init_ledc(config: &FloodlightConfig) -> Result<(), HwInitError> {
    use crate::app::sequence::Channel;

    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: pins::RGB_LEDC_TIMER,
        duty_resolution: u32::from(config.resolution_bits),
        freq_hz: config.pwm_frequency_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: called once from main() before the sequencer task runs.
    let rc = unsafe { ledc_timer_config(&timer) };
    if rc != ESP_OK as i32 {
        return Err(HwInitError::LedcTimerFailed(rc));
    }

    for ch in Channel::ALL {
        let channel = pins::ledc_channel(ch);
        let cfg = ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel,
            timer_sel: pins::RGB_LEDC_TIMER,
            intr_type: ledc_intr_type_t_LEDC_INTR_DISABLE,
            gpio_num: pins::gpio(ch),
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };
        let rc = unsafe { ledc_channel_config(&cfg) };
        if rc != ESP_OK as i32 {
            return Err(HwInitError::LedcChannelFailed { channel, rc });
        }
    }

    log::info!(
        "hw_init: LEDC {} Hz, {}-bit (R=CH{}, G=CH{}, B=CH{})",
        config.pwm_frequency_hz,
        config.resolution_bits,
        pins::RED_LEDC_CHANNEL,
        pins::GREEN_LEDC_CHANNEL,
        pins::BLUE_LEDC_CHANNEL,
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_ledc(config: &FloodlightConfig) -> Result<(), HwInitError> {
    log::debug!(
        "hw_init(sim): LEDC init skipped ({} Hz, {}-bit)",
        config.pwm_frequency_hz,
        config.resolution_bits
    );
    Ok(())
}

//! GPIO / LEDC assignments for the floodlight driver board (ESP32-C3).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin or channel numbers.

use crate::app::sequence::Channel;

// ---------------------------------------------------------------------------
// RGB gate drivers (LEDC PWM outputs)
// ---------------------------------------------------------------------------

pub const RED_LED_GPIO: i32 = 3;
pub const GREEN_LED_GPIO: i32 = 4;
pub const BLUE_LED_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// White strings (populated on the board, not driven yet)
// ---------------------------------------------------------------------------

pub const COOL_WHITE_LED_GPIO: i32 = 18;
pub const WARM_WHITE_LED_GPIO: i32 = 19;

// ---------------------------------------------------------------------------
// LEDC
// ---------------------------------------------------------------------------

/// All three color channels share timer 0 (low-speed mode; the C3 has no
/// high-speed group).
pub const RGB_LEDC_TIMER: u32 = 0;

pub const RED_LEDC_CHANNEL: u32 = 0;
pub const GREEN_LEDC_CHANNEL: u32 = 1;
pub const BLUE_LEDC_CHANNEL: u32 = 2;

/// GPIOs driven by the sweep, indexed by [`Channel::index`].
pub const RGB_GPIOS: [i32; Channel::COUNT] = [RED_LED_GPIO, GREEN_LED_GPIO, BLUE_LED_GPIO];

/// LEDC channel number for a color channel.
pub const fn ledc_channel(channel: Channel) -> u32 {
    match channel {
        Channel::Red => RED_LEDC_CHANNEL,
        Channel::Green => GREEN_LEDC_CHANNEL,
        Channel::Blue => BLUE_LEDC_CHANNEL,
    }
}

/// GPIO carrying a color channel's PWM.
pub const fn gpio(channel: Channel) -> i32 {
    RGB_GPIOS[channel.index()]
}

//! Peripheral initialization and the LEDC PWM driver.

pub mod delay;
pub mod hw_init;
pub mod ledc;

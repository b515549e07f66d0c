//! Host step delay.
//!
//! On the device the sequencer paces with `esp_idf_hal::delay::FreeRtos`,
//! which yields to the scheduler for the requested time. Host runs use
//! [`StdDelay`], a thread sleep behind the same `DelayNs` trait.

use std::time::Duration;

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

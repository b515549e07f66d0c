//! Floodlight firmware: main entry point.
//!
//! ```text
//!  banner ─▶ GPIO ─▶ NVS ─▶ event loop ─▶ LEDC ─▶ Wi-Fi STA ─▶ Sequencer::run
//!                                                  (async)       (forever)
//! ```
//!
//! Every init step must succeed before the sweep starts; a failure is
//! returned from `main`, which aborts the app on ESP-IDF.
#![deny(unused_must_use)]

use anyhow::{Result, anyhow};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::prelude::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;

use floodlight::adapters::wifi::WifiStation;
use floodlight::app::sequencer::Sequencer;
use floodlight::config::FloodlightConfig;
use floodlight::drivers::hw_init;
use floodlight::drivers::ledc::LedcPwm;
use floodlight::logging::color::HIGHLIGHT;
use floodlight::logging::{self, LogStream};
use floodlight::{dprintf_c, log_tagged};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap + logging ────────────────────────
    esp_idf_sys::link_patches();

    let config = FloodlightConfig::load()?;
    logging::init(LogStream::stdout().with_lock_timeout(config.log_lock_timeout()));
    logging::setup(log::LevelFilter::Info).map_err(|e| anyhow!("logger: {e}"))?;

    dprintf_c!(HIGHLIGHT, "--- LED Floodlight Start ---\n");

    // ── 2. Platform bring-up ──────────────────────────────────
    hw_init::init_gpio()?;

    let _nvs = EspDefaultNvsPartition::take()?;
    log_tagged!(NVS, "default NVS partition ready");

    let sysloop = EspSystemEventLoop::take()?;
    log_tagged!(TASK, "system event loop created");

    hw_init::init_ledc(&config)?;

    let peripherals = Peripherals::take()?;
    // Held for the life of the program; dropping it stops the radio.
    let _wifi = WifiStation::start(peripherals.modem, &sysloop, &config)?;

    // ── 3. Sweep forever ──────────────────────────────────────
    let pwm = LedcPwm::new(config.resolution_count());
    let mut sequencer = Sequencer::new(pwm, FreeRtos, config.step_delay_ms, config.step_divisor);
    log_tagged!(
        MISC,
        "sweep: {} levels per ramp, {} ms per step",
        sequencer.sequence().ramp().len(),
        config.step_delay_ms
    );

    let Err(e) = sequencer.run();
    Err(e.into())
}

//! Floodlight firmware library.
//!
//! Everything the binary runs lives here so it can be exercised on the
//! host: the sweep sequencer, the logging facility, configuration and the
//! drivers' host simulations. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod logging;
pub mod pins;

pub use error::{Error, Result};

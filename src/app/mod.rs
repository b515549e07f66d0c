//! Application core: the color sweep and the ports it drives.
//!
//! Nothing here touches hardware directly. The sequencer talks to the LEDC
//! through [`ports::PwmPort`] and paces itself with an `embedded_hal`
//! delay, so the whole sweep runs on the host against mocks.

pub mod ports;
pub mod sequence;
pub mod sequencer;

//! Adapters: platform services behind the application core.
//!
//! | Adapter | Provides              | Connects to                         |
//! |---------|-----------------------|-------------------------------------|
//! | `time`  | `Clock`               | ESP-IDF log timestamp / host uptime |
//! | `wifi`  | Station bring-up      | ESP-IDF Wi-Fi STA + event loop      |

pub mod time;
pub mod wifi;

//! Wi-Fi station bring-up.
//!
//! The floodlight only joins the configured network; nothing else uses the
//! link yet. Association runs in the background: [`WifiStation::start`]
//! issues start and connect and returns immediately, so the sweep never
//! waits on the network. Wi-Fi and IP events are logged through the
//! `NETWORK` class.
//!
//! Credentials live in RAM only (the driver gets no NVS partition).

use core::fmt;

use crate::config::FloodlightConfig;
use crate::log_tagged;

#[cfg(target_os = "espidf")]
use esp_idf_hal::modem::Modem;
#[cfg(target_os = "espidf")]
use esp_idf_svc::{
    eventloop::{EspSubscription, EspSystemEventLoop, System},
    netif::IpEvent,
    wifi::{AuthMethod, ClientConfiguration, Configuration, EspWifi, WifiEvent},
};
#[cfg(target_os = "espidf")]
use esp_idf_sys::EspError;

// ── Errors ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiError {
    /// ESP-IDF Wi-Fi / event-loop call failed.
    Driver(i32),
    /// SSID or password does not fit the driver's fields.
    InvalidCredentials,
}

impl fmt::Display for WifiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver(rc) => write!(f, "Wi-Fi driver error (rc={rc})"),
            Self::InvalidCredentials => f.write_str("Wi-Fi credentials rejected"),
        }
    }
}

impl std::error::Error for WifiError {}

#[cfg(target_os = "espidf")]
impl From<EspError> for WifiError {
    fn from(e: EspError) -> Self {
        Self::Driver(e.code())
    }
}

// ── Security selection ────────────────────────────────────────

/// Authentication the station asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    Open,
    Wpa2Personal,
}

impl Security {
    pub fn for_password(password: &str) -> Self {
        if password.is_empty() {
            Self::Open
        } else {
            Self::Wpa2Personal
        }
    }
}

#[cfg_attr(
    not(all(feature = "debug-logging", feature = "log-network")),
    allow(unused_variables)
)]
fn log_event(kind: &str, event: impl fmt::Debug) {
    log_tagged!(NETWORK, "{kind} event: {event:?}");
}

// ── Device ────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub struct WifiStation {
    wifi: EspWifi<'static>,
    _wifi_events: EspSubscription<'static, System>,
    _ip_events: EspSubscription<'static, System>,
}

#[cfg(target_os = "espidf")]
impl WifiStation {
    /// Create the station, subscribe to its events, start it and begin
    /// associating. Returns without waiting for a link.
    pub fn start(
        modem: Modem,
        sysloop: &EspSystemEventLoop,
        config: &FloodlightConfig,
    ) -> Result<Self, WifiError> {
        let wifi_events =
            sysloop.subscribe::<WifiEvent, _>(|event| log_event("wifi", event))?;
        let ip_events = sysloop.subscribe::<IpEvent, _>(|event| log_event("ip", event))?;

        let mut wifi = EspWifi::new(modem, sysloop.clone(), None)?;

        let auth_method = match Security::for_password(&config.wifi_password) {
            Security::Open => AuthMethod::None,
            Security::Wpa2Personal => AuthMethod::WPA2Personal,
        };
        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid: config
                .wifi_ssid
                .as_str()
                .try_into()
                .map_err(|_| WifiError::InvalidCredentials)?,
            password: config
                .wifi_password
                .as_str()
                .try_into()
                .map_err(|_| WifiError::InvalidCredentials)?,
            auth_method,
            bssid: None,
            ..Default::default()
        }))?;

        wifi.start()?;

        if config.wifi_ssid.is_empty() {
            log::warn!("wifi: no SSID configured, station started idle");
        } else {
            wifi.connect()?;
            log_tagged!(NETWORK, "station connecting to '{}'", config.wifi_ssid);
        }

        Ok(Self {
            wifi,
            _wifi_events: wifi_events,
            _ip_events: ip_events,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
pub struct WifiStation {
    ssid: heapless::String<32>,
    security: Security,
}

#[cfg(not(target_os = "espidf"))]
impl WifiStation {
    pub fn start(config: &FloodlightConfig) -> Result<Self, WifiError> {
        let security = Security::for_password(&config.wifi_password);
        log::debug!("wifi(sim): station '{}' ({:?})", config.wifi_ssid, security);
        log_event("wifi", "StaStarted");
        Ok(Self {
            ssid: config.wifi_ssid.clone(),
            security,
        })
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn security(&self) -> Security {
        self.security
    }

    /// The simulator never associates.
    pub fn is_connected(&self) -> bool {
        false
    }
}

//! Verbosity classes and their compile-time gates.
//!
//! Each class has a tag printed by the tagged emit macros and an enable
//! switch that is a Cargo feature (`log-task`, `log-network`, ...). A
//! disabled class is removed before type checking: the gate macro drops
//! the whole call, format string and arguments included.
//!
//! | Class        | Tag       | Feature          |
//! |--------------|-----------|------------------|
//! | `TASK`       | `TASK`    | `log-task`       |
//! | `NETWORK`    | `NET`     | `log-network`    |
//! | `NVS`        | `NVS`     | `log-nvs`        |
//! | `FILESYS`    | `FILESYS` | `log-filesys`    |
//! | `BACKGROUND` | `BACKGND` | `log-background` |
//! | `MISC`       | `MISC`    | `log-misc`       |

/// A named, independently switchable category of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbosityClass {
    pub name: &'static str,
    pub tag: &'static str,
    /// `true` when calls routed through this class are compiled in.
    pub enabled: bool,
}

/// RTOS and task related.
pub const TASK: VerbosityClass = VerbosityClass {
    name: "TASK",
    tag: "TASK",
    enabled: cfg!(all(feature = "debug-logging", feature = "log-task")),
};

/// Network and Wi-Fi related.
pub const NETWORK: VerbosityClass = VerbosityClass {
    name: "NETWORK",
    tag: "NET",
    enabled: cfg!(all(feature = "debug-logging", feature = "log-network")),
};

/// Non-volatile storage related.
pub const NVS: VerbosityClass = VerbosityClass {
    name: "NVS",
    tag: "NVS",
    enabled: cfg!(all(feature = "debug-logging", feature = "log-nvs")),
};

pub const FILESYS: VerbosityClass = VerbosityClass {
    name: "FILESYS",
    tag: "FILESYS",
    enabled: cfg!(all(feature = "debug-logging", feature = "log-filesys")),
};

/// Background operations.
pub const BACKGROUND: VerbosityClass = VerbosityClass {
    name: "BACKGROUND",
    tag: "BACKGND",
    enabled: cfg!(all(feature = "debug-logging", feature = "log-background")),
};

/// Anything that does not fit one of the other classes.
pub const MISC: VerbosityClass = VerbosityClass {
    name: "MISC",
    tag: "MISC",
    enabled: cfg!(all(feature = "debug-logging", feature = "log-misc")),
};

pub const ALL: [VerbosityClass; 6] = [TASK, NETWORK, NVS, FILESYS, BACKGROUND, MISC];

// ── Gates ─────────────────────────────────────────────────────
//
// One macro pair per class. The enabled variant passes its tokens through,
// the disabled variant swallows them.

#[doc(hidden)]
#[macro_export]
macro_rules! __class_gate {
    (TASK, $($body:tt)*) => { $crate::__gate_task! { $($body)* } };
    (NETWORK, $($body:tt)*) => { $crate::__gate_network! { $($body)* } };
    (NVS, $($body:tt)*) => { $crate::__gate_nvs! { $($body)* } };
    (FILESYS, $($body:tt)*) => { $crate::__gate_filesys! { $($body)* } };
    (BACKGROUND, $($body:tt)*) => { $crate::__gate_background! { $($body)* } };
    (MISC, $($body:tt)*) => { $crate::__gate_misc! { $($body)* } };
}

#[cfg(all(feature = "debug-logging", feature = "log-task"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_task { ($($body:tt)*) => { $($body)* }; }
#[cfg(not(all(feature = "debug-logging", feature = "log-task")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_task { ($($body:tt)*) => {}; }

#[cfg(all(feature = "debug-logging", feature = "log-network"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_network { ($($body:tt)*) => { $($body)* }; }
#[cfg(not(all(feature = "debug-logging", feature = "log-network")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_network { ($($body:tt)*) => {}; }

#[cfg(all(feature = "debug-logging", feature = "log-nvs"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_nvs { ($($body:tt)*) => { $($body)* }; }
#[cfg(not(all(feature = "debug-logging", feature = "log-nvs")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_nvs { ($($body:tt)*) => {}; }

#[cfg(all(feature = "debug-logging", feature = "log-filesys"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_filesys { ($($body:tt)*) => { $($body)* }; }
#[cfg(not(all(feature = "debug-logging", feature = "log-filesys")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_filesys { ($($body:tt)*) => {}; }

#[cfg(all(feature = "debug-logging", feature = "log-background"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_background { ($($body:tt)*) => { $($body)* }; }
#[cfg(not(all(feature = "debug-logging", feature = "log-background")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_background { ($($body:tt)*) => {}; }

#[cfg(all(feature = "debug-logging", feature = "log-misc"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_misc { ($($body:tt)*) => { $($body)* }; }
#[cfg(not(all(feature = "debug-logging", feature = "log-misc")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gate_misc { ($($body:tt)*) => {}; }

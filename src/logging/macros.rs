//! Logging macros.
//!
//! | Macro                          | Output                                   |
//! |--------------------------------|------------------------------------------|
//! | `dprintf!(fmt, ..)`            | payload                                  |
//! | `dprintf_c!(color, fmt, ..)`   | color, payload, reset                    |
//! | `dprintf_ts!(fmt, ..)`         | `(ts) ` payload `\n`                     |
//! | `dprintf_c_ts!(color, fmt, ..)`| color, `(ts) ` payload, reset, `\n`      |
//! | `log_plain!(CLASS, fmt, ..)`   | as `dprintf!`, gated by `CLASS`          |
//! | `logc_plain!(CLASS, color, ..)`| as `dprintf_c!`, gated by `CLASS`        |
//! | `log_tagged!(CLASS, fmt, ..)`  | `(ts) [TAG] ` payload `\n`, gated        |
//! | `logc_tagged!(CLASS, color, ..)`| colored `log_tagged!`, gated            |
//!
//! Without the `debug-logging` feature every macro expands to an empty
//! block. Class names are the constants in [`class`](super::class).

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! dprintf {
    ($($arg:tt)+) => {{
        $crate::logging::stream().emit(::core::format_args!($($arg)+));
    }};
}
#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! dprintf {
    ($($arg:tt)+) => {{}};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! dprintf_ts {
    ($($arg:tt)+) => {{
        $crate::logging::stream().emit_timestamped(::core::format_args!($($arg)+));
    }};
}
#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! dprintf_ts {
    ($($arg:tt)+) => {{}};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! dprintf_c {
    ($color:expr, $($arg:tt)+) => {{
        $crate::logging::stream().emit_colored($color, ::core::format_args!($($arg)+));
    }};
}
#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! dprintf_c {
    ($color:expr, $($arg:tt)+) => {{}};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! dprintf_c_ts {
    ($color:expr, $($arg:tt)+) => {{
        $crate::logging::stream()
            .emit_colored_timestamped($color, ::core::format_args!($($arg)+));
    }};
}
#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! dprintf_c_ts {
    ($color:expr, $($arg:tt)+) => {{}};
}

#[macro_export]
macro_rules! log_plain {
    ($class:ident, $($arg:tt)+) => {{
        $crate::__class_gate! { $class,
            $crate::logging::stream().emit(::core::format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! logc_plain {
    ($class:ident, $color:expr, $($arg:tt)+) => {{
        $crate::__class_gate! { $class,
            $crate::logging::stream().emit_colored($color, ::core::format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_tagged {
    ($class:ident, $($arg:tt)+) => {{
        $crate::__class_gate! { $class,
            $crate::logging::stream().emit_tagged(
                $crate::logging::class::$class.tag,
                ::core::format_args!($($arg)+),
            );
        }
    }};
}

#[macro_export]
macro_rules! logc_tagged {
    ($class:ident, $color:expr, $($arg:tt)+) => {{
        $crate::__class_gate! { $class,
            $crate::logging::stream().emit_colored_tagged(
                $crate::logging::class::$class.tag,
                $color,
                ::core::format_args!($($arg)+),
            );
        }
    }};
}

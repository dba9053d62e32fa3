//! Logging abstraction
//!
//! Provides unified logging macros that work across different hosts:
//! - `defmt` feature: uses defmt (probe/RTT targets talking to a remote daemon)
//! - `log` feature: uses the `log` facade (Linux hosts running next to pigpiod)
//! - Host tests: uses println!/eprintln!
//! - Otherwise: no-op, arguments are still type-checked
//!
//! When both backends are enabled, defmt wins.
//!
//! ## Usage
//!
//! ```ignore
//! crate::log_info!("MPU-6050 detected (WHO_AM_I: {:#x})", whoami);
//! ```

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::info!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        println!("[INFO] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::warn!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        println!("[WARN] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::error!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::error!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        eprintln!("[ERROR] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::debug!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        println!("[DEBUG] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::trace!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        println!("[TRACE] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

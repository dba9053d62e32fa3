//! Platform error types
//!
//! This module defines error types for transport operations against the
//! GPIO/I2C daemon.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All daemon client implementations map their native status codes to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Daemon connection failed
    Daemon(DaemonError),
    /// I2C operation failed
    I2c(I2cError),
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// Daemon connection errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaemonError {
    /// Could not reach the daemon
    ConnectFailed,
    /// Connection was lost or already closed
    NotConnected,
}

/// I2C-specific errors reported by the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Bus number rejected
    BadBus,
    /// 7-bit address rejected
    BadAddress,
    /// Handle unknown to the daemon
    BadHandle,
    /// Daemon handle pool exhausted
    NoHandle,
    /// Device open failed for another reason
    OpenFailed,
    /// Read transaction failed
    ReadFailed,
    /// Write transaction failed
    WriteFailed,
    /// Status code with no dedicated variant
    Other(i32),
}

impl I2cError {
    /// Map a negative pigpio status code to an I2C error
    ///
    /// Codes follow `pigpio.h`. Non-negative values are not errors and map to `Other`.
    pub fn from_status(status: i32) -> Self {
        match status {
            -24 => I2cError::NoHandle,
            -25 => I2cError::BadHandle,
            -71 => I2cError::OpenFailed,
            -74 => I2cError::BadBus,
            -75 => I2cError::BadAddress,
            -82 => I2cError::WriteFailed,
            -83 => I2cError::ReadFailed,
            other => I2cError::Other(other),
        }
    }
}

impl From<I2cError> for PlatformError {
    fn from(err: I2cError) -> Self {
        PlatformError::I2c(err)
    }
}

impl From<DaemonError> for PlatformError {
    fn from(err: DaemonError) -> Self {
        PlatformError::Daemon(err)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Daemon(e) => write!(f, "Daemon error: {:?}", e),
            PlatformError::I2c(e) => write!(f, "I2C error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}

//! Platform abstraction layer
//!
//! This module provides the transport abstraction for the remote GPIO/I2C daemon.
//! Concrete daemon clients live outside this crate and implement these traits.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{DaemonError, I2cError, PlatformError, Result};
pub use traits::{DaemonConfig, DaemonConnector, DeviceHandle, I2cDaemon};

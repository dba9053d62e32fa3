//! Platform abstraction traits
//!
//! This module defines the traits that daemon client implementations must provide.

pub mod daemon;
pub mod i2c;

// Re-export trait interfaces
pub use daemon::{DaemonConfig, DaemonConnector, DEFAULT_PORT};
pub use i2c::{DeviceHandle, I2cDaemon};

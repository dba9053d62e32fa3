//! Mock platform implementation for testing
//!
//! This module provides a mock daemon client that can be used for unit testing
//! without a Raspberry Pi or a running daemon.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pigpio_mpu6050::platform::mock::MockDaemon;
//! use pigpio_mpu6050::platform::traits::I2cDaemon;
//!
//! let mut daemon = MockDaemon::new();
//! let handle = daemon.i2c_open(1, 0x68).unwrap();
//! assert_eq!(daemon.i2c_read_byte_data(&handle, 0x75).unwrap(), 0x68);
//! ```

#![cfg(any(test, feature = "mock"))]

mod i2c;

pub use i2c::{DaemonTransaction, MockDaemon};

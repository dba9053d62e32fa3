#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! pigpio_mpu6050 - MPU-6050 driver over a remote GPIO/I2C daemon
//!
//! This library provides the transport abstraction for a pigpiod-style daemon,
//! a register-level MPU-6050 session driver, and the logging glue they share.

// Transport abstraction for the I2C daemon connection
pub mod platform;

// Device drivers using the transport abstraction
pub mod devices;

// Logging macros
pub mod core;

pub use devices::imu::mpu6050::{
    AccelRange, Channel, ChipRevision, DlpfConfig, GyroRange, Mpu6050Config, Mpu6050Session,
};
pub use devices::traits::{ImuError, RawImu};
pub use platform::{DaemonConfig, DaemonConnector, DeviceHandle, I2cDaemon, PlatformError};

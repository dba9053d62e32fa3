//! Device drivers
//!
//! Drivers are written against the platform transport traits, so they run
//! unchanged over a live daemon connection or the recording mock.
//!
//! ## Modules
//!
//! - `imu`: IMU sensor drivers (MPU-6050 family)
//! - `traits`: Device trait definitions (RawImu, ImuError)

pub mod imu;
pub mod traits;

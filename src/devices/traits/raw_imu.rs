//! Raw IMU Sensor Trait
//!
//! Device-independent interface for 6-axis sensors without on-chip fusion.
//! Consumers written against `RawImu` can be tested with a fake instead of
//! a daemon.
//!
//! ## Usage
//!
//! ```ignore
//! use pigpio_mpu6050::devices::traits::{ImuError, RawImu};
//!
//! fn accel_magnitude<I: RawImu>(imu: &mut I) -> Result<f32, ImuError> {
//!     Ok(imu.read_accel()?.norm())
//! }
//! ```

use super::ImuError;
use nalgebra::Vector3;

use crate::devices::imu::mpu6050::{Channel, Mpu6050Session};
use crate::platform::I2cDaemon;

/// Raw IMU sensor interface
///
/// Outputs are in the sensor frame, scaled by the chip's current range.
pub trait RawImu {
    /// Read accelerometer data (g)
    fn read_accel(&mut self) -> Result<Vector3<f32>, ImuError>;

    /// Read gyroscope data (°/s)
    fn read_gyro(&mut self) -> Result<Vector3<f32>, ImuError>;

    /// Output data rate in Hz
    fn sample_rate_hz(&mut self) -> Result<f32, ImuError>;
}

impl<D: I2cDaemon> RawImu for Mpu6050Session<D> {
    fn read_accel(&mut self) -> Result<Vector3<f32>, ImuError> {
        self.read_physical(Channel::Accelerometer)
    }

    fn read_gyro(&mut self) -> Result<Vector3<f32>, ImuError> {
        self.read_physical(Channel::Gyroscope)
    }

    fn sample_rate_hz(&mut self) -> Result<f32, ImuError> {
        self.output_rate_hz()
    }
}

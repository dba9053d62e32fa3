//! IMU Drivers
//!
//! ## Available Drivers
//!
//! - `mpu6050`: MPU-6050 6-axis IMU over a remote I2C daemon (also accepts
//!   MPU-6500 and MPU-9250 identities)
//!
//! ## Usage
//!
//! ```ignore
//! use pigpio_mpu6050::devices::imu::{Channel, Mpu6050Config, Mpu6050Session};
//!
//! let mut session = Mpu6050Session::open_with_config(&mut daemon, &Mpu6050Config::default())?;
//! let accel = session.read_physical(Channel::Accelerometer)?;
//! session.close()?;
//! ```

pub mod mpu6050;

pub use mpu6050::{
    AccelRange, Channel, ChipRevision, DlpfConfig, GyroRange, Mpu6050Config, Mpu6050Session,
};

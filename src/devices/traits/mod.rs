//! Device traits
//!
//! Hardware-independent error and sensor definitions shared by drivers.

pub mod imu;
pub mod raw_imu;

pub use imu::ImuError;
pub use raw_imu::RawImu;

//! MPU-6050 driver over a remote I2C daemon
//!
//! A session owns one daemon device handle from `open` to `close`. On open
//! the identity register is checked and the chip is woken; on close it is
//! put back to sleep and the handle is released. Dropping a session without
//! `close` releases the handle as well.
//!
//! ## Register access
//!
//! Ranges and the filter are 2- and 3-bit fields inside shared registers and
//! are updated read-modify-write. Samples are read as bursts from the output
//! registers, see `measurement`.

mod channel;
pub mod codec;
mod config;
mod configuration;
mod measurement;
pub mod registers;
mod session;

pub use channel::{Channel, ChannelDescriptor};
pub use codec::RegisterField;
pub use config::{AccelRange, DlpfConfig, GyroRange, Mpu6050Config};
pub use session::{ChipRevision, Mpu6050Session};

//! I2C daemon interface trait
//!
//! This module defines the byte-level I2C primitives that a GPIO/I2C daemon client must provide.

use crate::platform::Result;

/// Device handle issued by the daemon for one open I2C device
///
/// Not `Clone` or `Copy`: whoever holds the handle owns the remote resource,
/// and `I2cDaemon::i2c_close` consumes it.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceHandle(u32);

impl DeviceHandle {
    /// Wrap a raw handle value returned by the daemon
    ///
    /// Intended for transport implementations only.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw handle value as known to the daemon
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

/// I2C daemon interface trait
///
/// Client implementations must provide this interface for I2C access through
/// the daemon connection they wrap.
///
/// # Safety Invariants
///
/// - The connection must be established before use
/// - Bus number and 7-bit address are validated by the daemon, not by callers
/// - No concurrent use of the same handle from multiple contexts
pub trait I2cDaemon {
    /// Open an I2C device
    ///
    /// # Arguments
    ///
    /// * `bus` - I2C bus number on the daemon host
    /// * `address` - 7-bit I2C device address
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` with `BadBus`, `BadAddress`, `NoHandle`
    /// or `OpenFailed` depending on the daemon's answer.
    fn i2c_open(&mut self, bus: u32, address: u8) -> Result<DeviceHandle>;

    /// Release an I2C device handle
    fn i2c_close(&mut self, handle: DeviceHandle) -> Result<()>;

    /// Read a single register byte
    ///
    /// Performs START - ADDR(W) - REG - REPEATED_START - ADDR(R) - DATA - STOP.
    fn i2c_read_byte_data(&mut self, handle: &DeviceHandle, register: u8) -> Result<u8>;

    /// Write a single register byte
    fn i2c_write_byte_data(&mut self, handle: &DeviceHandle, register: u8, value: u8) -> Result<()>;

    /// Raw read from the device into `buffer`
    ///
    /// Returns the number of bytes actually read, which may be fewer than
    /// `buffer.len()`.
    fn i2c_read_device(&mut self, handle: &DeviceHandle, buffer: &mut [u8]) -> Result<usize>;

    /// Raw write to the device
    ///
    /// Commonly used to select a start register before `i2c_read_device`.
    fn i2c_write_device(&mut self, handle: &DeviceHandle, data: &[u8]) -> Result<()>;
}

impl<T: I2cDaemon + ?Sized> I2cDaemon for &mut T {
    fn i2c_open(&mut self, bus: u32, address: u8) -> Result<DeviceHandle> {
        (**self).i2c_open(bus, address)
    }

    fn i2c_close(&mut self, handle: DeviceHandle) -> Result<()> {
        (**self).i2c_close(handle)
    }

    fn i2c_read_byte_data(&mut self, handle: &DeviceHandle, register: u8) -> Result<u8> {
        (**self).i2c_read_byte_data(handle, register)
    }

    fn i2c_write_byte_data(&mut self, handle: &DeviceHandle, register: u8, value: u8) -> Result<()> {
        (**self).i2c_write_byte_data(handle, register, value)
    }

    fn i2c_read_device(&mut self, handle: &DeviceHandle, buffer: &mut [u8]) -> Result<usize> {
        (**self).i2c_read_device(handle, buffer)
    }

    fn i2c_write_device(&mut self, handle: &DeviceHandle, data: &[u8]) -> Result<()> {
        (**self).i2c_write_device(handle, data)
    }
}

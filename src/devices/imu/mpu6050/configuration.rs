//! Range, filter and sample-rate configuration
//!
//! Every masked setting goes through `update_field`: read the register,
//! replace the field, write it back. The sequence is two bus transactions
//! and is not atomic on the bus.

use super::channel::Channel;
use super::codec::{self, RegisterField};
use super::config::{AccelRange, DlpfConfig, GyroRange, Mpu6050Config};
use super::registers;
use super::session::Mpu6050Session;
use crate::devices::traits::ImuError;
use crate::platform::I2cDaemon;

/// Largest value of a 2-bit range field
const RANGE_FIELD_MAX: u8 = 0b11;

impl<D: I2cDaemon> Mpu6050Session<D> {
    /// Read-modify-write one register field
    ///
    /// Read and write failures both surface as `WriteFailed`: either way the
    /// value was not applied.
    fn update_field(&mut self, field: RegisterField, value: u8) -> Result<(), ImuError> {
        let current = self
            .read_register(field.register)
            .map_err(|_| ImuError::WriteFailed)?;
        let updated = field.encode(current, value);
        self.write_register(field.register, updated)?;
        crate::log_trace!(
            "reg {:#x}: {:#x} -> {:#x}",
            field.register,
            current,
            updated
        );
        Ok(())
    }

    /// Read one register field
    fn read_field(&mut self, field: RegisterField) -> Result<u8, ImuError> {
        let value = self.read_register(field.register)?;
        Ok(field.decode(value))
    }

    /// Set the full-scale range field (0-3) of a channel
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `range` exceeds the 2-bit domain (no bus traffic)
    /// - `WriteFailed` if either the read or the write step fails
    pub fn set_range(&mut self, channel: Channel, range: u8) -> Result<(), ImuError> {
        if range > RANGE_FIELD_MAX {
            return Err(ImuError::InvalidArgument);
        }
        self.update_field(channel.descriptor().range_field, range)?;
        crate::log_debug!("{:?} range set to {}", channel, range);
        Ok(())
    }

    /// Get the full-scale range field (0-3) of a channel
    pub fn get_range(&mut self, channel: Channel) -> Result<u8, ImuError> {
        self.read_field(channel.descriptor().range_field)
    }

    /// Set the accelerometer range
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), ImuError> {
        self.set_range(Channel::Accelerometer, range.bits())
    }

    /// Get the accelerometer range
    pub fn accel_range(&mut self) -> Result<AccelRange, ImuError> {
        let bits = self.get_range(Channel::Accelerometer)?;
        AccelRange::try_from(bits).map_err(|_| ImuError::ReadFailed)
    }

    /// Set the gyroscope range
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), ImuError> {
        self.set_range(Channel::Gyroscope, range.bits())
    }

    /// Get the gyroscope range
    pub fn gyro_range(&mut self) -> Result<GyroRange, ImuError> {
        let bits = self.get_range(Channel::Gyroscope)?;
        GyroRange::try_from(bits).map_err(|_| ImuError::ReadFailed)
    }

    /// Set the digital low pass filter, keeping EXT_SYNC_SET
    pub fn set_filter(&mut self, cfg: DlpfConfig) -> Result<(), ImuError> {
        self.update_field(codec::DLPF_CFG, cfg.bits())?;
        crate::log_debug!("DLPF set to {:?}", cfg);
        Ok(())
    }

    /// Get the digital low pass filter
    pub fn get_filter(&mut self) -> Result<DlpfConfig, ImuError> {
        let bits = self.read_field(codec::DLPF_CFG)?;
        Ok(DlpfConfig::from_bits(bits))
    }

    /// Set the sample rate divider; every value is legal
    pub fn set_sample_rate(&mut self, div: u8) -> Result<(), ImuError> {
        self.write_register(registers::SMPLRT_DIV, div)?;
        crate::log_debug!("Sample rate divider set to {}", div);
        Ok(())
    }

    /// Get the sample rate divider
    pub fn get_sample_rate(&mut self) -> Result<u8, ImuError> {
        self.read_register(registers::SMPLRT_DIV)
    }

    /// Current output data rate in Hz, from the DLPF setting and divider
    pub fn output_rate_hz(&mut self) -> Result<f32, ImuError> {
        let dlpf = self.get_filter()?;
        let div = self.get_sample_rate()?;
        Ok(dlpf.gyro_output_rate_hz() / (1.0 + div as f32))
    }

    /// Apply ranges, filter and divider from `config`
    ///
    /// Bus and address in `config` are ignored here; they are consumed by
    /// `open_with_config`.
    pub fn apply_config(&mut self, config: &Mpu6050Config) -> Result<(), ImuError> {
        self.set_accel_range(config.accel_range)?;
        self.set_gyro_range(config.gyro_range)?;
        self.set_filter(config.dlpf)?;
        self.set_sample_rate(config.sample_rate_div)?;
        crate::log_info!(
            "Configured: accel ±{}g, gyro ±{}dps, DLPF cfg {}, divider {}",
            config.accel_range.full_scale(),
            config.gyro_range.full_scale(),
            config.dlpf.bits(),
            config.sample_rate_div
        );
        Ok(())
    }
}

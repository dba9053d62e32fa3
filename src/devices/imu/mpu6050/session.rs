//! MPU-6050 session over the I2C daemon
//!
//! Owns one daemon device handle bound to one chip. The handle is released
//! on every exit path: `open` failure, `close`, and drop of an unclosed session.

use super::config::Mpu6050Config;
use super::registers;
use crate::devices::traits::ImuError;
use crate::platform::{DeviceHandle, I2cDaemon, I2cError, PlatformError};

/// Chip revision identified by WHO_AM_I
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipRevision {
    /// MPU-6050 (WHO_AM_I 0x68)
    Mpu6050,
    /// MPU-6500 (WHO_AM_I 0x70)
    Mpu6500,
    /// MPU-9250 (WHO_AM_I 0x71)
    Mpu9250,
}

impl ChipRevision {
    /// Identify a chip from its WHO_AM_I value
    pub fn from_who_am_i(value: u8) -> Option<Self> {
        match value {
            registers::MPU6050_WHO_AM_I_VALUE => Some(ChipRevision::Mpu6050),
            registers::MPU6500_WHO_AM_I_VALUE => Some(ChipRevision::Mpu6500),
            registers::MPU9250_WHO_AM_I_VALUE => Some(ChipRevision::Mpu9250),
            _ => None,
        }
    }

    /// Part name
    pub fn name(self) -> &'static str {
        match self {
            ChipRevision::Mpu6050 => "MPU-6050",
            ChipRevision::Mpu6500 => "MPU-6500",
            ChipRevision::Mpu9250 => "MPU-9250",
        }
    }
}

/// Open MPU-6050 session
///
/// Exclusively owns the daemon device handle. Pass `&mut daemon` to keep
/// using the connection after the session ends, or move an owned client in.
///
/// Not re-entrant: the range and filter setters are read-modify-write
/// sequences, so a session shared between threads must sit behind a mutex.
pub struct Mpu6050Session<D: I2cDaemon> {
    /// Daemon connection
    daemon: D,

    /// Device handle; `None` only once released
    handle: Option<DeviceHandle>,

    /// Chip identified on open
    chip: ChipRevision,

    /// Last power state written to PWR_MGMT_1
    awake: bool,
}

impl<D: I2cDaemon> Mpu6050Session<D> {
    /// Open a session with the chip at `address` on `bus`
    ///
    /// Verifies WHO_AM_I against the known revisions and wakes the chip.
    /// On any failure after the device handle was issued, the handle is
    /// released before returning.
    ///
    /// # Errors
    ///
    /// - `InvalidBusOrAddress` / `ResourceUnavailable` if the daemon refused the open
    /// - `DeviceOpenFailed` on identity mismatch, identity read failure or wake failure
    pub fn open(mut daemon: D, bus: u32, address: u8) -> Result<Self, ImuError> {
        let handle = daemon
            .i2c_open(bus, address)
            .map_err(|err| {
                crate::log_error!("i2c_open(bus {}, {:#x}) failed: {:?}", bus, address, err);
                open_error(err)
            })?;

        match Self::bring_up(&mut daemon, &handle) {
            Ok(chip) => {
                crate::log_info!(
                    "{} ready on bus {} at {:#x} (handle {})",
                    chip.name(),
                    bus,
                    address,
                    handle.raw()
                );
                Ok(Self {
                    daemon,
                    handle: Some(handle),
                    chip,
                    awake: true,
                })
            }
            Err(err) => {
                if let Err(cleanup) = daemon.i2c_close(handle) {
                    crate::log_error!("Releasing handle after failed open also failed: {:?}", cleanup);
                }
                Err(err)
            }
        }
    }

    /// Open a session and apply `config`
    ///
    /// If applying the configuration fails the session is dropped, which
    /// puts the chip back to sleep and releases the handle.
    pub fn open_with_config(daemon: D, config: &Mpu6050Config) -> Result<Self, ImuError> {
        let mut session = Self::open(daemon, config.bus, config.i2c_address)?;
        session.apply_config(config)?;
        Ok(session)
    }

    /// Identity check and wake-up on a freshly issued handle
    fn bring_up(daemon: &mut D, handle: &DeviceHandle) -> Result<ChipRevision, ImuError> {
        let whoami = daemon
            .i2c_read_byte_data(handle, registers::WHO_AM_I)
            .map_err(|err| {
                crate::log_error!("WHO_AM_I read failed: {:?}", err);
                ImuError::DeviceOpenFailed
            })?;

        let chip = ChipRevision::from_who_am_i(whoami).ok_or_else(|| {
            crate::log_error!(
                "Unknown IMU WHO_AM_I: {:#x} (expected 0x68, 0x70, or 0x71)",
                whoami
            );
            ImuError::DeviceOpenFailed
        })?;
        crate::log_debug!("{} detected (WHO_AM_I: {:#x})", chip.name(), whoami);

        daemon
            .i2c_write_byte_data(handle, registers::PWR_MGMT_1, registers::PWR_MGMT_1_WAKE)
            .map_err(|err| {
                crate::log_error!("Wake-up write failed: {:?}", err);
                ImuError::DeviceOpenFailed
            })?;

        Ok(chip)
    }

    /// Close the session
    ///
    /// Puts the chip to sleep on a best-effort basis, then releases the
    /// device handle. Only a failed release is reported.
    ///
    /// # Errors
    ///
    /// `DeviceCloseFailed` if the daemon refused to release the handle.
    pub fn close(mut self) -> Result<(), ImuError> {
        match self.handle.take() {
            Some(handle) => self.release(handle),
            None => Err(ImuError::Unexpected),
        }
    }

    fn release(&mut self, handle: DeviceHandle) -> Result<(), ImuError> {
        if let Err(err) = self.daemon.i2c_write_byte_data(
            &handle,
            registers::PWR_MGMT_1,
            registers::PWR_MGMT_1_SLEEP,
        ) {
            crate::log_warn!("Sleep write on close failed: {:?}", err);
        }
        self.awake = false;

        let raw = handle.raw();
        self.daemon.i2c_close(handle).map_err(|err| {
            crate::log_error!("i2c_close(handle {}) failed: {:?}", raw, err);
            ImuError::DeviceCloseFailed
        })
    }

    /// Chip revision identified on open
    pub fn chip(&self) -> ChipRevision {
        self.chip
    }

    /// Whether the last power write put the chip in normal mode
    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Daemon connection, for inspection
    pub fn daemon(&self) -> &D {
        &self.daemon
    }

    /// Put the chip to sleep (PWR_MGMT_1 = SLEEP)
    pub fn sleep(&mut self) -> Result<(), ImuError> {
        self.write_register(registers::PWR_MGMT_1, registers::PWR_MGMT_1_SLEEP)?;
        self.awake = false;
        Ok(())
    }

    /// Wake the chip (PWR_MGMT_1 = 0x00)
    pub fn wake(&mut self) -> Result<(), ImuError> {
        self.write_register(registers::PWR_MGMT_1, registers::PWR_MGMT_1_WAKE)?;
        self.awake = true;
        Ok(())
    }

    /// Read a register from the MPU-6050
    pub(super) fn read_register(&mut self, reg: u8) -> Result<u8, ImuError> {
        let handle = self.handle.as_ref().ok_or(ImuError::Unexpected)?;
        self.daemon
            .i2c_read_byte_data(handle, reg)
            .map_err(|_| ImuError::ReadFailed)
    }

    /// Write a register to the MPU-6050
    pub(super) fn write_register(&mut self, reg: u8, value: u8) -> Result<(), ImuError> {
        let handle = self.handle.as_ref().ok_or(ImuError::Unexpected)?;
        self.daemon
            .i2c_write_byte_data(handle, reg, value)
            .map_err(|_| ImuError::WriteFailed)
    }

    /// Read `buffer.len()` consecutive registers starting at `start`
    ///
    /// A single byte goes through the byte primitive; longer reads select
    /// the start register and issue one block read. Fewer bytes than
    /// requested is a failure.
    pub(super) fn read_block(&mut self, start: u8, buffer: &mut [u8]) -> Result<(), ImuError> {
        if let [byte] = buffer {
            *byte = self.read_register(start)?;
            return Ok(());
        }

        let handle = self.handle.as_ref().ok_or(ImuError::Unexpected)?;
        self.daemon
            .i2c_write_device(handle, &[start])
            .map_err(|_| ImuError::ReadFailed)?;
        let read = self
            .daemon
            .i2c_read_device(handle, buffer)
            .map_err(|_| ImuError::ReadFailed)?;

        if read != buffer.len() {
            crate::log_warn!(
                "Short burst from {:#x}: {} of {} bytes",
                start,
                read,
                buffer.len()
            );
            return Err(ImuError::ReadFailed);
        }
        Ok(())
    }
}

impl<D: I2cDaemon> Drop for Mpu6050Session<D> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            crate::log_debug!("Session dropped without close, releasing handle {}", handle.raw());
            let _ = self.release(handle);
        }
    }
}

/// Classify a daemon refusal to open the device
fn open_error(err: PlatformError) -> ImuError {
    match err {
        PlatformError::I2c(I2cError::BadBus | I2cError::BadAddress) => {
            ImuError::InvalidBusOrAddress
        }
        PlatformError::I2c(I2cError::NoHandle) | PlatformError::ResourceUnavailable => {
            ImuError::ResourceUnavailable
        }
        PlatformError::I2c(I2cError::OpenFailed) => ImuError::DeviceOpenFailed,
        _ => ImuError::Unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{DaemonTransaction, MockDaemon};

    #[test]
    fn test_open_wakes_chip() {
        let mut daemon = MockDaemon::new();
        let session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        assert_eq!(session.chip(), ChipRevision::Mpu6050);
        assert!(session.is_awake());
        drop(session);

        let log = daemon.transactions();
        assert_eq!(log[0], DaemonTransaction::Open { bus: 1, address: 0x68 });
        assert_eq!(log[1], DaemonTransaction::ReadByte { handle: 0, register: 0x75 });
        assert_eq!(
            log[2],
            DaemonTransaction::WriteByte { handle: 0, register: 0x6B, value: 0x00 }
        );
    }

    #[test]
    fn test_open_accepts_all_known_revisions() {
        for (whoami, chip) in [
            (0x68, ChipRevision::Mpu6050),
            (0x70, ChipRevision::Mpu6500),
            (0x71, ChipRevision::Mpu9250),
        ] {
            let mut daemon = MockDaemon::new();
            daemon.set_register(0x75, whoami);
            let session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
            assert_eq!(session.chip(), chip);
        }
    }

    #[test]
    fn test_open_identity_mismatch_releases_handle_once() {
        let mut daemon = MockDaemon::new();
        daemon.set_register(0x75, 0x12);

        let result = Mpu6050Session::open(&mut daemon, 1, 0x68);
        assert_eq!(result.err(), Some(ImuError::DeviceOpenFailed));
        assert_eq!(daemon.close_count(), 1);
        assert_eq!(daemon.open_handle_count(), 0);
        // No wake write on a foreign chip
        assert!(!daemon
            .transactions()
            .iter()
            .any(|t| matches!(t, DaemonTransaction::WriteByte { .. })));
    }

    #[test]
    fn test_open_identity_read_failure_releases_handle() {
        let mut daemon = MockDaemon::new();
        daemon.fail_read(0x75);

        let result = Mpu6050Session::open(&mut daemon, 1, 0x68);
        assert_eq!(result.err(), Some(ImuError::DeviceOpenFailed));
        assert_eq!(daemon.close_count(), 1);
        assert_eq!(daemon.open_handle_count(), 0);
    }

    #[test]
    fn test_open_wake_failure_releases_handle() {
        let mut daemon = MockDaemon::new();
        daemon.fail_write(0x6B);

        let result = Mpu6050Session::open(&mut daemon, 1, 0x68);
        assert_eq!(result.err(), Some(ImuError::DeviceOpenFailed));
        assert_eq!(daemon.close_count(), 1);
        assert_eq!(daemon.open_handle_count(), 0);
    }

    #[test]
    fn test_open_failure_reason_survives_cleanup_failure() {
        let mut daemon = MockDaemon::new();
        daemon.set_register(0x75, 0x00);
        daemon.fail_close(I2cError::BadHandle);

        let result = Mpu6050Session::open(&mut daemon, 1, 0x68);
        assert_eq!(result.err(), Some(ImuError::DeviceOpenFailed));
        assert_eq!(daemon.close_count(), 1);
    }

    #[test]
    fn test_open_maps_daemon_refusals() {
        for (err, expected) in [
            (I2cError::BadBus, ImuError::InvalidBusOrAddress),
            (I2cError::BadAddress, ImuError::InvalidBusOrAddress),
            (I2cError::NoHandle, ImuError::ResourceUnavailable),
            (I2cError::OpenFailed, ImuError::DeviceOpenFailed),
            (I2cError::Other(-1), ImuError::Unexpected),
        ] {
            let mut daemon = MockDaemon::new();
            daemon.fail_open(err);
            let result = Mpu6050Session::open(&mut daemon, 7, 0x68);
            assert_eq!(result.err(), Some(expected));
            // Nothing was issued, so nothing is released
            assert_eq!(daemon.close_count(), 0);
        }
    }

    #[test]
    fn test_close_sleeps_then_releases() {
        let mut daemon = MockDaemon::new();
        let session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        assert_eq!(session.close(), Ok(()));

        let log = daemon.transactions();
        let n = log.len();
        assert_eq!(
            log[n - 2],
            DaemonTransaction::WriteByte { handle: 0, register: 0x6B, value: 0x40 }
        );
        assert_eq!(log[n - 1], DaemonTransaction::Close { handle: 0 });
        assert_eq!(daemon.register(0x6B), 0x40);
        assert_eq!(daemon.close_count(), 1);
    }

    #[test]
    fn test_close_releases_even_if_sleep_write_fails() {
        let mut daemon = MockDaemon::new();
        daemon.fail_write_of(0x6B, 0x40);

        let session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        assert_eq!(session.close(), Ok(()));

        let log = daemon.transactions();
        let n = log.len();
        assert_eq!(
            log[n - 2],
            DaemonTransaction::WriteByte { handle: 0, register: 0x6B, value: 0x40 }
        );
        assert_eq!(log[n - 1], DaemonTransaction::Close { handle: 0 });
        assert_eq!(daemon.register(0x6B), 0x00);
        assert_eq!(daemon.open_handle_count(), 0);
    }

    #[test]
    fn test_close_reports_release_failure() {
        let mut daemon = MockDaemon::new();
        daemon.fail_close(I2cError::BadHandle);

        let session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        assert_eq!(session.close(), Err(ImuError::DeviceCloseFailed));
        assert_eq!(daemon.close_count(), 1);
    }

    #[test]
    fn test_close_reports_release_failure_after_failed_sleep() {
        let mut daemon = MockDaemon::new();
        daemon.fail_write_of(0x6B, 0x40);
        daemon.fail_close(I2cError::BadHandle);

        let session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        assert_eq!(session.close(), Err(ImuError::DeviceCloseFailed));
        assert_eq!(daemon.close_count(), 1);
    }

    #[test]
    fn test_drop_releases_handle() {
        let mut daemon = MockDaemon::new();
        {
            let _session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        }
        assert_eq!(daemon.close_count(), 1);
        assert_eq!(daemon.open_handle_count(), 0);
        assert_eq!(daemon.register(0x6B), 0x40);
    }

    #[test]
    fn test_sleep_and_wake() {
        let mut daemon = MockDaemon::new();
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        session.sleep().unwrap();
        assert!(!session.is_awake());
        session.wake().unwrap();
        assert!(session.is_awake());
        session.close().unwrap();
    }

    #[test]
    fn test_read_block_single_byte_uses_byte_primitive() {
        let mut daemon = MockDaemon::new();
        daemon.set_register(0x19, 0x07);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        let mut buf = [0u8; 1];
        session.read_block(0x19, &mut buf).unwrap();
        assert_eq!(buf, [0x07]);
        drop(session);

        assert!(daemon.block_reads().is_empty());
    }

    #[test]
    fn test_read_block_short_read_fails() {
        let mut daemon = MockDaemon::new();
        daemon.limit_block_reads(5);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        let mut buf = [0u8; 6];
        assert_eq!(session.read_block(0x3B, &mut buf), Err(ImuError::ReadFailed));
    }
}

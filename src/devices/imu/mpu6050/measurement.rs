//! Sample acquisition
//!
//! Output registers are big-endian two's complement, X/Y/Z in order.
//! `read_physical` follows the live range setting; the `_fast` variants
//! take the scale factor from the caller and skip the range read.

use nalgebra::Vector3;

use super::channel::Channel;
use super::codec;
use super::registers;
use super::session::Mpu6050Session;
use crate::devices::traits::ImuError;
use crate::platform::I2cDaemon;

impl<D: I2cDaemon> Mpu6050Session<D> {
    /// Read one raw X/Y/Z sample in a single 6-byte burst
    pub fn read_raw(&mut self, channel: Channel) -> Result<Vector3<i16>, ImuError> {
        let mut block = [0u8; registers::SAMPLE_BLOCK_LEN];
        self.read_block(channel.descriptor().data_start, &mut block)?;
        Ok(codec::decode_vector(&block))
    }

    /// Read one sample scaled by the chip's current range
    ///
    /// Issues the burst first, then reads the range field.
    pub fn read_physical(&mut self, channel: Channel) -> Result<Vector3<f32>, ImuError> {
        let raw = self.read_raw(channel)?;
        let range = self.get_range(channel)?;
        let sensitivity = channel
            .descriptor()
            .sensitivity_for(range)
            .ok_or(ImuError::ReadFailed)?;
        Ok(codec::scale_by_sensitivity(&raw, sensitivity))
    }

    /// Read one sample scaled by a caller-supplied per-digit factor
    pub fn read_physical_fast(
        &mut self,
        channel: Channel,
        per_digit: f32,
    ) -> Result<Vector3<f32>, ImuError> {
        let raw = self.read_raw(channel)?;
        Ok(codec::scale_by_per_digit(&raw, per_digit))
    }

    /// Read accelerometer and gyroscope in one burst from ACCEL_XOUT_H
    ///
    /// TEMP_OUT sits between the two blocks and is discarded.
    pub fn read_both_fast(
        &mut self,
        accel_per_digit: f32,
        gyro_per_digit: f32,
    ) -> Result<(Vector3<f32>, Vector3<f32>), ImuError> {
        let mut burst = [0u8; registers::MOTION_BURST_LEN];
        self.read_block(registers::ACCEL_XOUT_H, &mut burst)?;

        let accel = codec::decode_vector_at(&burst, 0).ok_or(ImuError::Unexpected)?;
        let gyro = codec::decode_vector_at(&burst, registers::GYRO_BLOCK_OFFSET)
            .ok_or(ImuError::Unexpected)?;
        crate::log_trace!(
            "raw accel [{}, {}, {}] gyro [{}, {}, {}]",
            accel.x,
            accel.y,
            accel.z,
            gyro.x,
            gyro.y,
            gyro.z
        );

        Ok((
            codec::scale_by_per_digit(&accel, accel_per_digit),
            codec::scale_by_per_digit(&gyro, gyro_per_digit),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::imu::mpu6050::config::{AccelRange, GyroRange};
    use crate::platform::mock::{DaemonTransaction, MockDaemon};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_read_raw_burst() {
        let mut daemon = MockDaemon::new();
        daemon.set_registers(0x3B, &[0x40, 0x00, 0xFF, 0xFE, 0x80, 0x00]);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        let before = session.daemon().transactions().len();

        let raw = session.read_raw(Channel::Accelerometer).unwrap();
        assert_eq!(raw, Vector3::new(16384, -2, i16::MIN));

        let log = &session.daemon().transactions()[before..];
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], DaemonTransaction::WriteDevice { handle: 0, data: vec![0x3B] });
        assert_eq!(log[1], DaemonTransaction::ReadDevice { handle: 0, len: 6 });
    }

    #[test]
    fn test_read_raw_gyro_registers() {
        let mut daemon = MockDaemon::new();
        daemon.set_registers(0x43, &[0x00, 0x83, 0xFF, 0x7D, 0x01, 0x00]);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        let raw = session.read_raw(Channel::Gyroscope).unwrap();
        assert_eq!(raw, Vector3::new(131, -131, 256));
    }

    #[test]
    fn test_short_burst_is_read_failed() {
        let mut daemon = MockDaemon::new();
        daemon.limit_block_reads(5);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        assert_eq!(
            session.read_raw(Channel::Accelerometer),
            Err(ImuError::ReadFailed)
        );
    }

    #[test]
    fn test_read_physical_uses_live_range() {
        let mut daemon = MockDaemon::new();
        daemon.set_registers(0x3B, &[0x40, 0x00, 0x00, 0x00, 0xC0, 0x00]);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        session.set_accel_range(AccelRange::G2).unwrap();
        let g = session.read_physical(Channel::Accelerometer).unwrap();
        assert!(approx(g.x, 1.0));
        assert!(approx(g.y, 0.0));
        assert!(approx(g.z, -1.0));

        session.set_accel_range(AccelRange::G4).unwrap();
        let g = session.read_physical(Channel::Accelerometer).unwrap();
        assert!(approx(g.x, 2.0));
    }

    #[test]
    fn test_read_physical_reads_sample_before_range() {
        let mut daemon = MockDaemon::new();
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        let before = session.daemon().transactions().len();

        session.read_physical(Channel::Gyroscope).unwrap();

        let log = &session.daemon().transactions()[before..];
        assert_eq!(log[1], DaemonTransaction::ReadDevice { handle: 0, len: 6 });
        assert_eq!(log[2], DaemonTransaction::ReadByte { handle: 0, register: 0x1B });
    }

    #[test]
    fn test_read_physical_gyro() {
        let mut daemon = MockDaemon::new();
        daemon.set_registers(0x43, &[0x00, 0x83, 0x00, 0x00, 0x00, 0x00]);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        session.set_gyro_range(GyroRange::Dps250).unwrap();
        let dps = session.read_physical(Channel::Gyroscope).unwrap();
        assert!(approx(dps.x, 1.0));
    }

    #[test]
    fn test_read_physical_range_read_failure() {
        let mut daemon = MockDaemon::new();
        daemon.fail_read(0x1C);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        assert_eq!(
            session.read_physical(Channel::Accelerometer),
            Err(ImuError::ReadFailed)
        );
    }

    #[test]
    fn test_read_physical_fast_skips_range_read() {
        let mut daemon = MockDaemon::new();
        daemon.set_registers(0x3B, &[0x00, 0x64, 0xFF, 0x9C, 0x00, 0x00]);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        let before = session.daemon().transactions().len();

        let g = session
            .read_physical_fast(Channel::Accelerometer, 0.000061)
            .unwrap();
        assert!(approx(g.x, 0.0061));
        assert!(approx(g.y, -0.0061));
        assert!(approx(g.z, 0.0));

        let log = &session.daemon().transactions()[before..];
        assert!(!log
            .iter()
            .any(|t| matches!(t, DaemonTransaction::ReadByte { .. })));
    }

    #[test]
    fn test_read_both_fast_single_burst() {
        let mut daemon = MockDaemon::new();
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();
        let before = session.daemon().transactions().len();

        session.read_both_fast(0.000244, 0.0152).unwrap();

        let log = &session.daemon().transactions()[before..];
        assert_eq!(
            log,
            &[
                DaemonTransaction::WriteDevice { handle: 0, data: vec![0x3B] },
                DaemonTransaction::ReadDevice { handle: 0, len: 14 },
            ]
        );
        assert_eq!(session.daemon().block_reads(), vec![14]);
    }

    #[test]
    fn test_read_both_fast_skips_temperature() {
        let mut daemon = MockDaemon::new();
        daemon.set_registers(
            0x3B,
            &[
                0x10, 0x00, 0x00, 0x00, 0xF0, 0x00, // accel
                0x7F, 0xFF, // TEMP_OUT
                0x00, 0x0A, 0xFF, 0xF6, 0x00, 0x00, // gyro
            ],
        );
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        let (accel, gyro) = session.read_both_fast(1.0, 0.5).unwrap();
        assert_eq!(accel, Vector3::new(4096.0, 0.0, -4096.0));
        assert_eq!(gyro, Vector3::new(5.0, -5.0, 0.0));
    }

    #[test]
    fn test_read_both_fast_short_burst() {
        let mut daemon = MockDaemon::new();
        daemon.limit_block_reads(12);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        assert_eq!(session.read_both_fast(1.0, 1.0), Err(ImuError::ReadFailed));
    }

    #[test]
    fn test_read_burst_failure() {
        let mut daemon = MockDaemon::new();
        daemon.fail_read(0x43);
        let mut session = Mpu6050Session::open(&mut daemon, 1, 0x68).unwrap();

        assert_eq!(session.read_raw(Channel::Gyroscope), Err(ImuError::ReadFailed));
        assert!(session.read_raw(Channel::Accelerometer).is_ok());
    }
}

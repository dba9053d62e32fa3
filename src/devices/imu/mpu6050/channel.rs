//! Sensor channels and their register/conversion tables

use super::codec::{self, RegisterField};
use super::registers;

/// One of the two measurement subsystems on the chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Accelerometer, g
    Accelerometer,
    /// Gyroscope, °/s
    Gyroscope,
}

/// Static per-channel data: where the channel lives and how to scale it
#[derive(Debug)]
pub struct ChannelDescriptor {
    /// Full-scale range field
    pub range_field: RegisterField,
    /// First output register (X high byte)
    pub data_start: u8,
    /// LSB sensitivity indexed by range field value
    pub sensitivity: [f32; 4],
    /// Per-digit multiplier indexed by range field value
    pub per_digit: [f32; 4],
    /// Physical unit of converted samples
    pub unit: &'static str,
}

impl ChannelDescriptor {
    /// Sensitivity for a raw range field value
    pub fn sensitivity_for(&self, range: u8) -> Option<f32> {
        self.sensitivity.get(range as usize).copied()
    }

    /// Per-digit multiplier for a raw range field value
    pub fn per_digit_for(&self, range: u8) -> Option<f32> {
        self.per_digit.get(range as usize).copied()
    }
}

static ACCELEROMETER: ChannelDescriptor = ChannelDescriptor {
    range_field: codec::ACCEL_FS_SEL,
    data_start: registers::ACCEL_XOUT_H,
    sensitivity: [
        registers::ACCEL_SENSITIVITY_2G,
        registers::ACCEL_SENSITIVITY_4G,
        registers::ACCEL_SENSITIVITY_8G,
        registers::ACCEL_SENSITIVITY_16G,
    ],
    per_digit: [
        registers::ACCEL_PER_DIGIT_2G,
        registers::ACCEL_PER_DIGIT_4G,
        registers::ACCEL_PER_DIGIT_8G,
        registers::ACCEL_PER_DIGIT_16G,
    ],
    unit: "g",
};

static GYROSCOPE: ChannelDescriptor = ChannelDescriptor {
    range_field: codec::GYRO_FS_SEL,
    data_start: registers::GYRO_XOUT_H,
    sensitivity: [
        registers::GYRO_SENSITIVITY_250DPS,
        registers::GYRO_SENSITIVITY_500DPS,
        registers::GYRO_SENSITIVITY_1000DPS,
        registers::GYRO_SENSITIVITY_2000DPS,
    ],
    per_digit: [
        registers::GYRO_PER_DIGIT_250DPS,
        registers::GYRO_PER_DIGIT_500DPS,
        registers::GYRO_PER_DIGIT_1000DPS,
        registers::GYRO_PER_DIGIT_2000DPS,
    ],
    unit: "dps",
};

impl Channel {
    /// Both channels, in burst order
    pub const ALL: [Channel; 2] = [Channel::Accelerometer, Channel::Gyroscope];

    /// Register and conversion table for this channel
    pub fn descriptor(self) -> &'static ChannelDescriptor {
        match self {
            Channel::Accelerometer => &ACCELEROMETER,
            Channel::Gyroscope => &GYROSCOPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::imu::mpu6050::config::{AccelRange, GyroRange};

    #[test]
    fn test_descriptor_registers() {
        let accel = Channel::Accelerometer.descriptor();
        assert_eq!(accel.range_field.register, 0x1C);
        assert_eq!(accel.data_start, 0x3B);

        let gyro = Channel::Gyroscope.descriptor();
        assert_eq!(gyro.range_field.register, 0x1B);
        assert_eq!(gyro.data_start, 0x43);
    }

    #[test]
    fn test_tables_agree_with_typed_ranges() {
        for bits in 0..=3u8 {
            let accel = AccelRange::try_from(bits).unwrap();
            let gyro = GyroRange::try_from(bits).unwrap();
            let a = Channel::Accelerometer.descriptor();
            let g = Channel::Gyroscope.descriptor();
            assert_eq!(a.sensitivity_for(bits), Some(accel.sensitivity()));
            assert_eq!(a.per_digit_for(bits), Some(accel.per_digit()));
            assert_eq!(g.sensitivity_for(bits), Some(gyro.sensitivity()));
            assert_eq!(g.per_digit_for(bits), Some(gyro.per_digit()));
        }
    }

    #[test]
    fn test_unknown_range_has_no_entry() {
        assert_eq!(Channel::Accelerometer.descriptor().sensitivity_for(4), None);
        assert_eq!(Channel::Gyroscope.descriptor().per_digit_for(7), None);
    }
}

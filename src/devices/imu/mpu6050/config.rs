//! MPU-6050 Configuration
//!
//! Typed range, filter and bring-up settings.

use super::registers;
use crate::devices::traits::ImuError;

/// Gyroscope full scale range (GYRO_CONFIG FS_SEL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250 °/s
    #[default]
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s
    Dps2000,
}

impl GyroRange {
    /// FS_SEL field value (0-3)
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Sensitivity (LSB per °/s)
    pub fn sensitivity(self) -> f32 {
        match self {
            GyroRange::Dps250 => registers::GYRO_SENSITIVITY_250DPS,
            GyroRange::Dps500 => registers::GYRO_SENSITIVITY_500DPS,
            GyroRange::Dps1000 => registers::GYRO_SENSITIVITY_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_SENSITIVITY_2000DPS,
        }
    }

    /// Resolution (°/s per LSB), for the fast read paths
    pub fn per_digit(self) -> f32 {
        match self {
            GyroRange::Dps250 => registers::GYRO_PER_DIGIT_250DPS,
            GyroRange::Dps500 => registers::GYRO_PER_DIGIT_500DPS,
            GyroRange::Dps1000 => registers::GYRO_PER_DIGIT_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_PER_DIGIT_2000DPS,
        }
    }

    /// Full scale in °/s
    pub fn full_scale(self) -> f32 {
        match self {
            GyroRange::Dps250 => 250.0,
            GyroRange::Dps500 => 500.0,
            GyroRange::Dps1000 => 1000.0,
            GyroRange::Dps2000 => 2000.0,
        }
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = ImuError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0 => Ok(GyroRange::Dps250),
            1 => Ok(GyroRange::Dps500),
            2 => Ok(GyroRange::Dps1000),
            3 => Ok(GyroRange::Dps2000),
            _ => Err(ImuError::InvalidArgument),
        }
    }
}

/// Accelerometer full scale range (ACCEL_CONFIG AFS_SEL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2 g
    #[default]
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
    /// ±16 g
    G16,
}

impl AccelRange {
    /// AFS_SEL field value (0-3)
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Sensitivity (LSB per g)
    pub fn sensitivity(self) -> f32 {
        match self {
            AccelRange::G2 => registers::ACCEL_SENSITIVITY_2G,
            AccelRange::G4 => registers::ACCEL_SENSITIVITY_4G,
            AccelRange::G8 => registers::ACCEL_SENSITIVITY_8G,
            AccelRange::G16 => registers::ACCEL_SENSITIVITY_16G,
        }
    }

    /// Resolution (g per LSB), for the fast read paths
    pub fn per_digit(self) -> f32 {
        match self {
            AccelRange::G2 => registers::ACCEL_PER_DIGIT_2G,
            AccelRange::G4 => registers::ACCEL_PER_DIGIT_4G,
            AccelRange::G8 => registers::ACCEL_PER_DIGIT_8G,
            AccelRange::G16 => registers::ACCEL_PER_DIGIT_16G,
        }
    }

    /// Full scale in g
    pub fn full_scale(self) -> f32 {
        match self {
            AccelRange::G2 => 2.0,
            AccelRange::G4 => 4.0,
            AccelRange::G8 => 8.0,
            AccelRange::G16 => 16.0,
        }
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = ImuError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0 => Ok(AccelRange::G2),
            1 => Ok(AccelRange::G4),
            2 => Ok(AccelRange::G8),
            3 => Ok(AccelRange::G16),
            _ => Err(ImuError::InvalidArgument),
        }
    }
}

/// Digital Low Pass Filter configuration (CONFIG DLPF_CFG)
///
/// Bandwidths are accel / gyro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfConfig {
    /// 260 Hz / 256 Hz, gyro output rate 8 kHz
    #[default]
    Bw260Hz,
    /// 184 Hz / 188 Hz
    Bw184Hz,
    /// 94 Hz / 98 Hz
    Bw94Hz,
    /// 44 Hz / 42 Hz
    Bw44Hz,
    /// 21 Hz / 20 Hz
    Bw21Hz,
    /// 10 Hz / 10 Hz
    Bw10Hz,
    /// 5 Hz / 5 Hz
    Bw5Hz,
    /// DLPF_CFG = 7, reserved by the register map; written and read back verbatim
    Reserved,
}

impl DlpfConfig {
    /// DLPF_CFG field value (0-7)
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a DLPF_CFG field; bits above the field are ignored
    pub const fn from_bits(bits: u8) -> Self {
        match bits & registers::DLPF_CFG_MASK {
            0 => DlpfConfig::Bw260Hz,
            1 => DlpfConfig::Bw184Hz,
            2 => DlpfConfig::Bw94Hz,
            3 => DlpfConfig::Bw44Hz,
            4 => DlpfConfig::Bw21Hz,
            5 => DlpfConfig::Bw10Hz,
            6 => DlpfConfig::Bw5Hz,
            _ => DlpfConfig::Reserved,
        }
    }

    /// Accelerometer bandwidth in Hz
    pub fn accel_bandwidth_hz(self) -> Option<u16> {
        match self {
            DlpfConfig::Bw260Hz => Some(260),
            DlpfConfig::Bw184Hz => Some(184),
            DlpfConfig::Bw94Hz => Some(94),
            DlpfConfig::Bw44Hz => Some(44),
            DlpfConfig::Bw21Hz => Some(21),
            DlpfConfig::Bw10Hz => Some(10),
            DlpfConfig::Bw5Hz => Some(5),
            DlpfConfig::Reserved => None,
        }
    }

    /// Gyroscope bandwidth in Hz
    pub fn gyro_bandwidth_hz(self) -> Option<u16> {
        match self {
            DlpfConfig::Bw260Hz => Some(256),
            DlpfConfig::Bw184Hz => Some(188),
            DlpfConfig::Bw94Hz => Some(98),
            DlpfConfig::Bw44Hz => Some(42),
            DlpfConfig::Bw21Hz => Some(20),
            DlpfConfig::Bw10Hz => Some(10),
            DlpfConfig::Bw5Hz => Some(5),
            DlpfConfig::Reserved => None,
        }
    }

    /// Gyroscope output rate that the sample-rate divider divides
    pub fn gyro_output_rate_hz(self) -> f32 {
        match self {
            DlpfConfig::Bw260Hz | DlpfConfig::Reserved => {
                registers::GYRO_OUTPUT_RATE_UNFILTERED_HZ
            }
            _ => registers::GYRO_OUTPUT_RATE_FILTERED_HZ,
        }
    }
}

/// MPU-6050 session configuration
#[derive(Debug, Clone, Copy)]
pub struct Mpu6050Config {
    /// I2C bus number on the daemon host
    pub bus: u32,

    /// 7-bit device address
    pub i2c_address: u8,

    /// Accelerometer range
    pub accel_range: AccelRange,

    /// Gyroscope range
    pub gyro_range: GyroRange,

    /// Digital low pass filter
    pub dlpf: DlpfConfig,

    /// Sample rate divider: rate = gyro_output_rate / (1 + div)
    pub sample_rate_div: u8,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            bus: 1, // /dev/i2c-1 on the 40-pin header
            i2c_address: registers::MPU6050_ADDR,
            accel_range: AccelRange::G8,
            gyro_range: GyroRange::Dps500,
            dlpf: DlpfConfig::Bw44Hz,
            sample_rate_div: 4, // 1 kHz / 5 = 200 Hz
        }
    }
}

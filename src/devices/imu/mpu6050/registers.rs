//! MPU-6050 Register Definitions
//!
//! Based on MPU-6000/MPU-6050 Register Map and Descriptions (RM-MPU-6000A-00 v4.2).
//! The MPU-6500 and MPU-9250 share every address used here.

#![allow(dead_code)]

// ============================================================================
// I2C Address
// ============================================================================

/// MPU-6050 I2C address when AD0 pin is low
pub const MPU6050_ADDR: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high
pub const MPU6050_ADDR_ALT: u8 = 0x69;

// ============================================================================
// Registers
// ============================================================================

/// Sample rate divider: SAMPLE_RATE = Gyro_Output_Rate / (1 + SMPLRT_DIV)
pub const SMPLRT_DIV: u8 = 0x19;

/// Configuration register (EXT_SYNC_SET[5:3], DLPF_CFG[2:0])
pub const CONFIG: u8 = 0x1A;

/// Gyroscope configuration (self-test[7:5], FS_SEL[4:3])
pub const GYRO_CONFIG: u8 = 0x1B;

/// Accelerometer configuration (self-test[7:5], AFS_SEL[4:3])
pub const ACCEL_CONFIG: u8 = 0x1C;

/// Accelerometer measurements (high byte first)
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const ACCEL_XOUT_L: u8 = 0x3C;
pub const ACCEL_YOUT_H: u8 = 0x3D;
pub const ACCEL_YOUT_L: u8 = 0x3E;
pub const ACCEL_ZOUT_H: u8 = 0x3F;
pub const ACCEL_ZOUT_L: u8 = 0x40;

/// Temperature measurement (high byte first)
pub const TEMP_OUT_H: u8 = 0x41;
pub const TEMP_OUT_L: u8 = 0x42;

/// Gyroscope measurements (high byte first)
pub const GYRO_XOUT_H: u8 = 0x43;
pub const GYRO_XOUT_L: u8 = 0x44;
pub const GYRO_YOUT_H: u8 = 0x45;
pub const GYRO_YOUT_L: u8 = 0x46;
pub const GYRO_ZOUT_H: u8 = 0x47;
pub const GYRO_ZOUT_L: u8 = 0x48;

/// Power management 1
pub const PWR_MGMT_1: u8 = 0x6B;

/// Power management 2
pub const PWR_MGMT_2: u8 = 0x6C;

/// Device ID
pub const WHO_AM_I: u8 = 0x75;

// ============================================================================
// Register Values
// ============================================================================

/// WHO_AM_I value of the MPU-6050
pub const MPU6050_WHO_AM_I_VALUE: u8 = 0x68;

/// WHO_AM_I value of the MPU-6500 (6-axis)
pub const MPU6500_WHO_AM_I_VALUE: u8 = 0x70;

/// WHO_AM_I value of the MPU-9250
pub const MPU9250_WHO_AM_I_VALUE: u8 = 0x71;

/// PWR_MGMT_1: clear SLEEP, internal 8 MHz oscillator
pub const PWR_MGMT_1_WAKE: u8 = 0x00;

/// PWR_MGMT_1: SLEEP bit
pub const PWR_MGMT_1_SLEEP: u8 = 0x40;

// ============================================================================
// Bit Fields
// ============================================================================

/// Full scale select field in GYRO_CONFIG / ACCEL_CONFIG
pub const FS_SEL_MASK: u8 = 0x18;
pub const FS_SEL_SHIFT: u8 = 3;

/// DLPF_CFG field in CONFIG
pub const DLPF_CFG_MASK: u8 = 0x07;
pub const DLPF_CFG_SHIFT: u8 = 0;

/// EXT_SYNC_SET field in CONFIG
pub const EXT_SYNC_SET_MASK: u8 = 0x38;
pub const EXT_SYNC_SET_SHIFT: u8 = 3;

// ============================================================================
// Burst Layout
// ============================================================================

/// Bytes per 3-axis sample block
pub const SAMPLE_BLOCK_LEN: usize = 6;

/// Offset of GYRO_XOUT_H from ACCEL_XOUT_H (TEMP_OUT sits in between)
pub const GYRO_BLOCK_OFFSET: usize = (GYRO_XOUT_H - ACCEL_XOUT_H) as usize;

/// Length of one burst covering accel, temperature and gyro output registers
pub const MOTION_BURST_LEN: usize = GYRO_BLOCK_OFFSET + SAMPLE_BLOCK_LEN;

// ============================================================================
// Scaling Constants
// ============================================================================

/// Accelerometer sensitivity (LSB/g) for each range
pub const ACCEL_SENSITIVITY_2G: f32 = 16384.0;
pub const ACCEL_SENSITIVITY_4G: f32 = 8192.0;
pub const ACCEL_SENSITIVITY_8G: f32 = 4096.0;
pub const ACCEL_SENSITIVITY_16G: f32 = 2048.0;

/// Gyroscope sensitivity (LSB/°/s) for each range
pub const GYRO_SENSITIVITY_250DPS: f32 = 131.0;
pub const GYRO_SENSITIVITY_500DPS: f32 = 65.5;
pub const GYRO_SENSITIVITY_1000DPS: f32 = 32.8;
pub const GYRO_SENSITIVITY_2000DPS: f32 = 16.4;

/// Accelerometer resolution (g/LSB) for each range
pub const ACCEL_PER_DIGIT_2G: f32 = 0.000061;
pub const ACCEL_PER_DIGIT_4G: f32 = 0.000122;
pub const ACCEL_PER_DIGIT_8G: f32 = 0.000244;
pub const ACCEL_PER_DIGIT_16G: f32 = 0.0004882;

/// Gyroscope resolution (°/s/LSB) for each range
pub const GYRO_PER_DIGIT_250DPS: f32 = 0.007633;
pub const GYRO_PER_DIGIT_500DPS: f32 = 0.015267;
pub const GYRO_PER_DIGIT_1000DPS: f32 = 0.030487;
pub const GYRO_PER_DIGIT_2000DPS: f32 = 0.060975;

/// Gyro output rate with the DLPF disabled (DLPF_CFG = 0 or 7)
pub const GYRO_OUTPUT_RATE_UNFILTERED_HZ: f32 = 8000.0;

/// Gyro output rate with the DLPF enabled
pub const GYRO_OUTPUT_RATE_FILTERED_HZ: f32 = 1000.0;

//! Register codec
//!
//! Pure transforms between register bytes and typed values. No I/O.

use super::registers;
use nalgebra::Vector3;

/// A bit field inside one 8-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterField {
    /// Register address
    pub register: u8,
    /// Bits occupied by the field
    pub mask: u8,
    /// Position of the field's least significant bit
    pub shift: u8,
}

impl RegisterField {
    /// Extract this field from a register byte
    pub const fn decode(&self, byte: u8) -> u8 {
        decode_field(byte, self.mask, self.shift)
    }

    /// Replace this field in a register byte
    pub const fn encode(&self, byte: u8, field: u8) -> u8 {
        encode_field(byte, self.mask, self.shift, field)
    }
}

/// ACCEL_CONFIG AFS_SEL[4:3]
pub const ACCEL_FS_SEL: RegisterField = RegisterField {
    register: registers::ACCEL_CONFIG,
    mask: registers::FS_SEL_MASK,
    shift: registers::FS_SEL_SHIFT,
};

/// GYRO_CONFIG FS_SEL[4:3]
pub const GYRO_FS_SEL: RegisterField = RegisterField {
    register: registers::GYRO_CONFIG,
    mask: registers::FS_SEL_MASK,
    shift: registers::FS_SEL_SHIFT,
};

/// CONFIG DLPF_CFG[2:0]
pub const DLPF_CFG: RegisterField = RegisterField {
    register: registers::CONFIG,
    mask: registers::DLPF_CFG_MASK,
    shift: registers::DLPF_CFG_SHIFT,
};

/// CONFIG EXT_SYNC_SET[5:3]
pub const EXT_SYNC_SET: RegisterField = RegisterField {
    register: registers::CONFIG,
    mask: registers::EXT_SYNC_SET_MASK,
    shift: registers::EXT_SYNC_SET_SHIFT,
};

/// Mask then right-shift
pub const fn decode_field(byte: u8, mask: u8, shift: u8) -> u8 {
    (byte & mask) >> shift
}

/// Clear `mask`, then OR in `field << shift`; bits outside `mask` are kept
///
/// Field bits that do not fit in `mask` are dropped.
pub const fn encode_field(byte: u8, mask: u8, shift: u8, field: u8) -> u8 {
    (byte & !mask) | ((field << shift) & mask)
}

/// Combine a big-endian high/low byte pair into a twos-complement sample
pub const fn decode_sample16(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

/// Decode X, Y, Z from one 6-byte output block
pub fn decode_vector(block: &[u8; registers::SAMPLE_BLOCK_LEN]) -> Vector3<i16> {
    Vector3::new(
        decode_sample16(block[0], block[1]),
        decode_sample16(block[2], block[3]),
        decode_sample16(block[4], block[5]),
    )
}

/// Decode the 6-byte block starting at `offset` of a burst buffer
///
/// Returns `None` if the buffer is too short.
pub fn decode_vector_at(buffer: &[u8], offset: usize) -> Option<Vector3<i16>> {
    let end = offset.checked_add(registers::SAMPLE_BLOCK_LEN)?;
    let block: &[u8; registers::SAMPLE_BLOCK_LEN] = buffer.get(offset..end)?.try_into().ok()?;
    Some(decode_vector(block))
}

/// Scale a raw sample by a per-digit multiplier
pub fn scale_by_per_digit(raw: &Vector3<i16>, per_digit: f32) -> Vector3<f32> {
    raw.map(|v| v as f32 * per_digit)
}

/// Scale a raw sample by dividing through an LSB sensitivity
pub fn scale_by_sensitivity(raw: &Vector3<i16>, sensitivity: f32) -> Vector3<f32> {
    raw.map(|v| v as f32 / sensitivity)
}

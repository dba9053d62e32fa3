//! IMU error taxonomy
//!
//! Every driver operation reports one of these kinds. Daemon status codes
//! are classified into them at the driver boundary; the raw code is logged,
//! not carried.

/// IMU error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// Parameter outside its legal domain, rejected before any bus traffic
    #[error("Invalid argument")]
    InvalidArgument,

    /// Daemon rejected the bus number or device address
    #[error("Invalid bus or address")]
    InvalidBusOrAddress,

    /// Daemon has no free device handles
    #[error("Resource unavailable")]
    ResourceUnavailable,

    /// Open refused, identity mismatch or wake-up failed
    #[error("Device open failed")]
    DeviceOpenFailed,

    /// Handle release failed
    #[error("Device close failed")]
    DeviceCloseFailed,

    /// Register or burst read failed, or returned too few bytes
    #[error("Read failed")]
    ReadFailed,

    /// Register write failed; also covers the read step of a read-modify-write
    #[error("Write failed")]
    WriteFailed,

    /// Failure that fits no other kind
    #[error("Unexpected error")]
    Unexpected,
}

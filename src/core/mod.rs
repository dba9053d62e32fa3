//! Core infrastructure
//!
//! Crate-wide plumbing shared by the transport layer and the device drivers.

pub mod logging;

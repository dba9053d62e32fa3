//! Mock I2C daemon implementation for testing

use crate::platform::{
    traits::{DaemonConfig, DaemonConnector, DeviceHandle, I2cDaemon},
    DaemonError, I2cError, PlatformError, Result,
};

/// WHO_AM_I register address answered by the default register file
const WHO_AM_I: u8 = 0x75;

/// PWR_MGMT_1 register address
const PWR_MGMT_1: u8 = 0x6B;

/// Daemon transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonTransaction {
    /// Device open request
    Open { bus: u32, address: u8 },
    /// Device handle release
    Close { handle: u32 },
    /// Single register read
    ReadByte { handle: u32, register: u8 },
    /// Single register write
    WriteByte { handle: u32, register: u8, value: u8 },
    /// Raw block read
    ReadDevice { handle: u32, len: usize },
    /// Raw block write
    WriteDevice { handle: u32, data: Vec<u8> },
}

/// Mock GPIO/I2C daemon
///
/// Emulates one device behind the daemon with a 256-byte register file and an
/// auto-incrementing register pointer. Records all transactions for test
/// verification and allows injecting failures per register or per primitive.
#[derive(Debug)]
pub struct MockDaemon {
    registers: [u8; 256],
    pointer: u8,
    transactions: Vec<DaemonTransaction>,
    open_handles: Vec<u32>,
    next_handle: u32,
    connected: bool,
    open_error: Option<I2cError>,
    close_error: Option<I2cError>,
    failing_reads: Vec<u8>,
    failing_writes: Vec<u8>,
    failing_write_values: Vec<(u8, u8)>,
    block_read_limit: Option<usize>,
}

impl Default for MockDaemon {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDaemon {
    /// Create a connected mock daemon with an MPU-6050 at power-on reset
    pub fn new() -> Self {
        let mut registers = [0u8; 256];
        registers[WHO_AM_I as usize] = 0x68;
        registers[PWR_MGMT_1 as usize] = 0x40;

        Self {
            registers,
            pointer: 0,
            transactions: Vec::new(),
            open_handles: Vec::new(),
            next_handle: 0,
            connected: true,
            open_error: None,
            close_error: None,
            failing_reads: Vec::new(),
            failing_writes: Vec::new(),
            failing_write_values: Vec::new(),
            block_read_limit: None,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> &[DaemonTransaction] {
        &self.transactions
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Number of `i2c_close` calls recorded
    pub fn close_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| matches!(t, DaemonTransaction::Close { .. }))
            .count()
    }

    /// Lengths of all block reads recorded, in order
    pub fn block_reads(&self) -> Vec<usize> {
        self.transactions
            .iter()
            .filter_map(|t| match t {
                DaemonTransaction::ReadDevice { len, .. } => Some(*len),
                _ => None,
            })
            .collect()
    }

    /// Number of handles issued and not yet released
    pub fn open_handle_count(&self) -> usize {
        self.open_handles.len()
    }

    /// Set a register value
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    /// Set consecutive register values starting at `start`
    pub fn set_registers(&mut self, start: u8, values: &[u8]) {
        for (offset, value) in values.iter().enumerate() {
            let register = start.wrapping_add(offset as u8);
            self.registers[register as usize] = *value;
        }
    }

    /// Get current register value
    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    /// Make the next `i2c_open` calls fail with `err`
    pub fn fail_open(&mut self, err: I2cError) {
        self.open_error = Some(err);
    }

    /// Make `i2c_close` calls fail with `err` (the handle is still forgotten)
    pub fn fail_close(&mut self, err: I2cError) {
        self.close_error = Some(err);
    }

    /// Make byte and block reads of `register` fail
    pub fn fail_read(&mut self, register: u8) {
        self.failing_reads.push(register);
    }

    /// Make byte writes to `register` fail
    pub fn fail_write(&mut self, register: u8) {
        self.failing_writes.push(register);
    }

    /// Make byte writes of exactly `value` to `register` fail
    pub fn fail_write_of(&mut self, register: u8, value: u8) {
        self.failing_write_values.push((register, value));
    }

    /// Truncate every block read to at most `limit` bytes
    pub fn limit_block_reads(&mut self, limit: usize) {
        self.block_read_limit = Some(limit);
    }

    fn check_handle(&self, handle: &DeviceHandle) -> Result<()> {
        if !self.connected {
            return Err(DaemonError::NotConnected.into());
        }
        if self.open_handles.contains(&handle.raw()) {
            Ok(())
        } else {
            Err(I2cError::BadHandle.into())
        }
    }
}

impl I2cDaemon for MockDaemon {
    fn i2c_open(&mut self, bus: u32, address: u8) -> Result<DeviceHandle> {
        self.transactions
            .push(DaemonTransaction::Open { bus, address });

        if !self.connected {
            return Err(DaemonError::NotConnected.into());
        }
        if let Some(err) = self.open_error {
            return Err(err.into());
        }
        if address > 0x7F {
            return Err(I2cError::BadAddress.into());
        }

        let raw = self.next_handle;
        self.next_handle += 1;
        self.open_handles.push(raw);
        Ok(DeviceHandle::from_raw(raw))
    }

    fn i2c_close(&mut self, handle: DeviceHandle) -> Result<()> {
        self.transactions.push(DaemonTransaction::Close {
            handle: handle.raw(),
        });
        self.check_handle(&handle)?;
        self.open_handles.retain(|h| *h != handle.raw());

        match self.close_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn i2c_read_byte_data(&mut self, handle: &DeviceHandle, register: u8) -> Result<u8> {
        self.transactions.push(DaemonTransaction::ReadByte {
            handle: handle.raw(),
            register,
        });
        self.check_handle(handle)?;

        if self.failing_reads.contains(&register) {
            return Err(I2cError::ReadFailed.into());
        }
        Ok(self.registers[register as usize])
    }

    fn i2c_write_byte_data(&mut self, handle: &DeviceHandle, register: u8, value: u8) -> Result<()> {
        self.transactions.push(DaemonTransaction::WriteByte {
            handle: handle.raw(),
            register,
            value,
        });
        self.check_handle(handle)?;

        if self.failing_writes.contains(&register)
            || self.failing_write_values.contains(&(register, value))
        {
            return Err(I2cError::WriteFailed.into());
        }
        self.registers[register as usize] = value;
        Ok(())
    }

    fn i2c_read_device(&mut self, handle: &DeviceHandle, buffer: &mut [u8]) -> Result<usize> {
        self.transactions.push(DaemonTransaction::ReadDevice {
            handle: handle.raw(),
            len: buffer.len(),
        });
        self.check_handle(handle)?;

        if self.failing_reads.contains(&self.pointer) {
            return Err(I2cError::ReadFailed.into());
        }

        let to_read = match self.block_read_limit {
            Some(limit) => core::cmp::min(buffer.len(), limit),
            None => buffer.len(),
        };
        for byte in buffer.iter_mut().take(to_read) {
            *byte = self.registers[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(to_read)
    }

    fn i2c_write_device(&mut self, handle: &DeviceHandle, data: &[u8]) -> Result<()> {
        self.transactions.push(DaemonTransaction::WriteDevice {
            handle: handle.raw(),
            data: data.to_vec(),
        });
        self.check_handle(handle)?;

        if let Some((register, values)) = data.split_first() {
            self.pointer = *register;
            for value in values {
                self.registers[self.pointer as usize] = *value;
                self.pointer = self.pointer.wrapping_add(1);
            }
        }
        Ok(())
    }
}

impl DaemonConnector for MockDaemon {
    fn connect(config: &DaemonConfig<'_>) -> Result<Self> {
        config
            .port_or_default()
            .parse::<u16>()
            .map_err(|_| PlatformError::InvalidConfig)?;
        Ok(Self::new())
    }

    fn disconnect(mut self) {
        self.connected = false;
    }
}

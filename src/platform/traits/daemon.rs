//! Daemon connection trait
//!
//! Opening and closing the connection to the remote GPIO/I2C daemon.

use crate::platform::Result;

/// Default TCP port of the pigpio daemon
pub const DEFAULT_PORT: &str = "8888";

/// Daemon connection configuration
///
/// `None` selects the daemon's own default, matching pigpiod's convention of
/// falling back to `PIGPIO_ADDR` / `PIGPIO_PORT` and then localhost:8888.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaemonConfig<'a> {
    /// Hostname or IP address of the daemon host (`None` = local machine)
    pub host: Option<&'a str>,
    /// TCP port of the daemon (`None` = default port)
    pub port: Option<&'a str>,
}

impl<'a> DaemonConfig<'a> {
    /// Connect to a daemon on a specific host
    pub const fn remote(host: &'a str, port: &'a str) -> Self {
        Self {
            host: Some(host),
            port: Some(port),
        }
    }

    /// Port to use, resolving the default
    pub fn port_or_default(&self) -> &'a str {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

/// Connection lifecycle of a daemon client
pub trait DaemonConnector: Sized {
    /// Connect to the daemon
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Daemon(DaemonError::ConnectFailed)` if the
    /// daemon cannot be reached.
    fn connect(config: &DaemonConfig<'_>) -> Result<Self>;

    /// Disconnect from the daemon
    fn disconnect(self);
}

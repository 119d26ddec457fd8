//! Configuration for monkeylink
//!
//! Centralized configuration with sensible defaults.
//!
//! The client itself is handed an already-open connection and has no
//! settings of its own; this config feeds the [`crate::net::connect`]
//! helper and the CLI binary.

/// Configuration for establishing a connection to the automation agent
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Agent address (host:port). The agent conventionally listens on
    /// port 12345, forwarded from the device.
    pub addr: String,

    /// Connect timeout (milliseconds); 0 means block until the OS gives up
    pub connect_timeout_ms: u64,

    /// Disable Nagle's algorithm on the established stream
    pub nodelay: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:12345".to_string(),
            connect_timeout_ms: 5000,
            nodelay: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the agent address (host:port)
    pub fn addr(mut self, addr: impl Into<String>) -> Self {
        self.config.addr = addr.into();
        self
    }

    /// Set the connect timeout (in milliseconds); 0 disables the timeout
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Enable or disable Nagle's algorithm suppression
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Configuration for the EC client
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for an EC client instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Daemon host name or address
    pub host: String,

    /// Daemon EC port (aMule default is 4712)
    pub port: u16,

    /// EC password (plain text, hashed during the handshake)
    pub password: String,

    /// Connect timeout (milliseconds, 0 = no timeout)
    pub connect_timeout_ms: u64,

    /// Socket read timeout (milliseconds, 0 = no timeout)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = no timeout)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Client Identity
    // -------------------------------------------------------------------------
    /// Client name advertised during authentication
    pub client_name: String,

    /// Client version advertised during authentication
    pub client_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4712,
            password: String::new(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            write_timeout_ms: 5000,
            client_name: "amule-ec".to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
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
    /// Set the daemon host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the daemon EC port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the EC password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the client name advertised during authentication
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.config.client_name = name.into();
        self
    }

    /// Set the client version advertised during authentication
    pub fn client_version(mut self, version: impl Into<String>) -> Self {
        self.config.client_version = version.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Configuration management.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use ipmi_exporter_sdr::DEFAULT_IPMI_PORT;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server listen address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Collection interval in seconds
    #[serde(default = "default_interval")]
    pub interval: u64,

    /// IPMI target configuration
    #[serde(default)]
    pub ipmi: IpmiConfig,
}

/// IPMI target host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpmiConfig {
    /// BMC address
    #[serde(default)]
    pub host: String,

    /// IPMI username
    #[serde(default)]
    pub username: String,

    /// IPMI password
    #[serde(default)]
    pub password: String,

    /// IPMI-over-LAN port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for IpmiConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            password: String::new(),
            port: default_port(),
        }
    }
}

// Default value functions
fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_interval() -> u64 {
    30
}

fn default_port() -> u16 {
    DEFAULT_IPMI_PORT
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults so that environment-only
    /// deployments work without a config file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = if path.as_ref().exists() {
            let content = std::fs::read_to_string(path.as_ref())
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration")?
        } else {
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Applies IPMI_HOST, IPMI_USERNAME, and IPMI_PASSWORD environment
    /// overrides on top of the file values.
    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("IPMI_HOST") {
            self.ipmi.host = host;
        }
        if let Ok(username) = std::env::var("IPMI_USERNAME") {
            self.ipmi.username = username;
        }
        if let Ok(password) = std::env::var("IPMI_PASSWORD") {
            self.ipmi.password = password;
        }
    }

    /// Validates that the required IPMI target settings are present.
    ///
    /// Host, username, and password have no sane defaults; refusing to start
    /// beats exporting an empty metrics page forever.
    pub fn validate(&self) -> Result<()> {
        if self.ipmi.host.is_empty() || self.ipmi.username.is_empty() || self.ipmi.password.is_empty()
        {
            bail!(
                "IPMI host, username, and password must be set \
                 (config file [ipmi] table or IPMI_HOST, IPMI_USERNAME, IPMI_PASSWORD)"
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            interval: default_interval(),
            ipmi: IpmiConfig::default(),
        }
    }
}

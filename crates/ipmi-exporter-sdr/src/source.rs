//! Report retrieval from the remote BMC.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};
use crate::DEFAULT_IPMI_PORT;

/// Source of raw SDR report text.
///
/// The daemon fetches through this trait so collection can be exercised
/// without a live BMC.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetches the current multi-line sensor report.
    async fn fetch(&self) -> Result<String>;
}

/// Fetches reports by running `ipmitool sdr elist full` over IPMI-over-LAN.
pub struct IpmitoolSource {
    host: String,
    username: String,
    password: String,
    port: u16,
}

impl IpmitoolSource {
    /// Creates a source for the given BMC address and credentials.
    pub fn new(host: String, username: String, password: String, port: Option<u16>) -> Self {
        Self {
            host,
            username,
            password,
            port: port.unwrap_or(DEFAULT_IPMI_PORT),
        }
    }
}

#[async_trait]
impl ReportSource for IpmitoolSource {
    // No timeout is applied here: a stalled BMC stalls the collection
    // schedule until ipmitool itself gives up.
    async fn fetch(&self) -> Result<String> {
        debug!("Running ipmitool sdr elist against {}", self.host);
        let output = Command::new("ipmitool")
            .arg("-I")
            .arg("lanplus")
            .arg("-H")
            .arg(&self.host)
            .arg("-p")
            .arg(self.port.to_string())
            .arg("-U")
            .arg(&self.username)
            .arg("-P")
            .arg(&self.password)
            .arg("sdr")
            .arg("elist")
            .arg("full")
            .output()
            .await?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

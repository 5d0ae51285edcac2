//! Error types for the IPMI SDR library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while retrieving a sensor report.
///
/// Parse failures are not represented here: malformed report lines are
/// filtered out during parsing, never surfaced as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The ipmitool binary could not be spawned.
    #[error("failed to run ipmitool: {0}")]
    Spawn(#[from] std::io::Error),

    /// ipmitool ran but exited with a failure status.
    #[error("ipmitool exited with {status}: {stderr}")]
    CommandFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// ipmitool produced output that is not valid UTF-8.
    #[error("ipmitool output is not valid UTF-8: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

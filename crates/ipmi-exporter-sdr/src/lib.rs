//! IPMI Sensor Data Repository Library
//!
//! Parses the pipe-delimited output of `ipmitool sdr elist full` into typed
//! sensor readings and provides the report-source abstraction used by the
//! exporter daemon to retrieve reports from a remote BMC.

pub mod classify;
pub mod error;
pub mod reading;
pub mod record;
pub mod report;
pub mod source;

pub use classify::classify_value;
pub use error::{Error, Result};
pub use reading::{Quantity, SensorReading};
pub use record::{parse_record, RawRecord};
pub use report::parse_report;
pub use source::{IpmitoolSource, ReportSource};

/// Default IPMI-over-LAN port.
pub const DEFAULT_IPMI_PORT: u16 = 623;

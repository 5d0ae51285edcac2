//! Typed sensor reading model.

/// Physical quantity measured by a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Voltage rails, reported in volts.
    Voltage,
    /// Temperatures, reported in degrees celsius.
    Temperature,
    /// Fan speeds, reported in RPM.
    Fan,
    /// Power draw, reported in watts.
    Power,
    /// Current draw, reported in amperes.
    Current,
}

impl Quantity {
    /// Returns the canonical unit string for this quantity.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Voltage => "volts",
            Quantity::Temperature => "celsius",
            Quantity::Fan => "rpm",
            Quantity::Power => "watts",
            Quantity::Current => "amperes",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Voltage => write!(f, "voltage"),
            Quantity::Temperature => write!(f, "temperature"),
            Quantity::Fan => write!(f, "fan"),
            Quantity::Power => write!(f, "power"),
            Quantity::Current => write!(f, "current"),
        }
    }
}

/// One sensor reading extracted from an SDR report.
///
/// Constructed only for report lines that matched the five-column layout,
/// carried an "ok" status, held an actual reading, and classified to a known
/// unit. All other lines are dropped during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Display label of the sensor, e.g. "CPU1 Temp".
    pub name: String,
    /// Report-local sensor identifier, e.g. "01h".
    pub id: String,
    /// Health status as reported by the BMC (always "ok" after filtering).
    pub status: String,
    /// Entity association, e.g. "3.1". Preserved but unused downstream.
    pub entity: String,
    /// Parsed numeric magnitude.
    pub value: f64,
    /// Physical quantity the value measures.
    pub quantity: Quantity,
}

//! Full-report parsing.

use crate::classify::classify_value;
use crate::reading::SensorReading;
use crate::record::parse_record;

/// Marker ipmitool prints for sensors without a current reading.
const NO_READING_MARKER: &str = "No Reading";

/// Parses a full multi-line SDR report into sensor readings.
///
/// Lines that are empty, malformed, not status "ok", without a reading, or
/// with an unclassifiable value field are skipped. Sensor reports routinely
/// contain disabled sensors and vendor noise lines, so skipping is the normal
/// path, not an error: this function always returns, possibly empty, no
/// matter how much of the report is garbage. Output order follows input
/// order and duplicate sensor identities are preserved.
pub fn parse_report(report: &str) -> Vec<SensorReading> {
    let mut readings = Vec::new();

    for line in report.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(record) = parse_record(line) else {
            continue;
        };

        if record.status != "ok" {
            continue;
        }

        if record.value_text.contains(NO_READING_MARKER) {
            continue;
        }

        let Some((value, quantity)) = classify_value(record.value_text) else {
            continue;
        };

        readings.push(SensorReading {
            name: record.name.to_string(),
            id: record.id.to_string(),
            status: record.status.to_string(),
            entity: record.entity.to_string(),
            value,
            quantity,
        });
    }

    readings
}

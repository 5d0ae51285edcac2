//! Prometheus metric registry for sensor readings.

use anyhow::{Context, Result};
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

use ipmi_exporter_sdr::{Quantity, SensorReading};

/// Labels carried by every sensor gauge.
const SENSOR_LABELS: [&str; 3] = ["sensor_name", "sensor_id", "host"];

/// One gauge family per physical quantity, all registered on an owned
/// registry. Constructed once at startup and shared by reference between the
/// collection loop (writes) and the web server (reads); the prometheus crate
/// handles synchronization per gauge, so a scrape may observe a mix of old
/// and new values across sensors while a cycle is in progress.
pub struct SensorMetrics {
    registry: Registry,
    voltage: GaugeVec,
    temperature: GaugeVec,
    fan: GaugeVec,
    power: GaugeVec,
    current: GaugeVec,
}

impl SensorMetrics {
    /// Creates the five gauge families and registers them.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let voltage = GaugeVec::new(
            Opts::new("ipmi_voltage_volts", "IPMI voltage sensor readings in volts"),
            &SENSOR_LABELS,
        )?;
        let temperature = GaugeVec::new(
            Opts::new(
                "ipmi_temperature_celsius",
                "IPMI temperature sensor readings in celsius",
            ),
            &SENSOR_LABELS,
        )?;
        let fan = GaugeVec::new(
            Opts::new("ipmi_fan_speed_rpm", "IPMI fan speed sensor readings in RPM"),
            &SENSOR_LABELS,
        )?;
        let power = GaugeVec::new(
            Opts::new("ipmi_power_watts", "IPMI power sensor readings in watts"),
            &SENSOR_LABELS,
        )?;
        let current = GaugeVec::new(
            Opts::new(
                "ipmi_current_amperes",
                "IPMI current sensor readings in amperes",
            ),
            &SENSOR_LABELS,
        )?;

        registry.register(Box::new(voltage.clone()))?;
        registry.register(Box::new(temperature.clone()))?;
        registry.register(Box::new(fan.clone()))?;
        registry.register(Box::new(power.clone()))?;
        registry.register(Box::new(current.clone()))?;

        Ok(Self {
            registry,
            voltage,
            temperature,
            fan,
            power,
            current,
        })
    }

    /// Overwrites the gauge for the reading's sensor identity.
    ///
    /// Keys are never removed: a sensor absent from a later report keeps its
    /// last known value until the process restarts. Label growth over the
    /// process lifetime is bounded by the host's sensor inventory.
    pub fn record(&self, reading: &SensorReading, host: &str) {
        let gauge = match reading.quantity {
            Quantity::Voltage => &self.voltage,
            Quantity::Temperature => &self.temperature,
            Quantity::Fan => &self.fan,
            Quantity::Power => &self.power,
            Quantity::Current => &self.current,
        };
        gauge
            .with_label_values(&[reading.name.as_str(), reading.id.as_str(), host])
            .set(reading.value);
    }

    /// Renders all gauges in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buffer)
            .context("Failed to encode metrics")?;
        String::from_utf8(buffer).context("Encoded metrics are not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipmi_exporter_sdr::parse_report;

    fn record_report(metrics: &SensorMetrics, report: &str, host: &str) {
        for reading in parse_report(report) {
            metrics.record(&reading, host);
        }
    }

    #[test]
    fn test_two_families_updated() {
        let metrics = SensorMetrics::new().unwrap();
        let report = "\
            12V            | 30h | ok  | 10.1 | 12.240 Volts\n\
            not a sensor line\n\
            CPU1 Temp      | 01h | ok  |  3.1 | 45 degrees C\n";
        record_report(&metrics, report, "bmc1");

        let output = metrics.render().unwrap();
        assert!(output.contains(
            "ipmi_voltage_volts{host=\"bmc1\",sensor_id=\"30h\",sensor_name=\"12V\"} 12.24"
        ));
        assert!(output.contains(
            "ipmi_temperature_celsius{host=\"bmc1\",sensor_id=\"01h\",sensor_name=\"CPU1 Temp\"} 45"
        ));
        assert!(!output.contains("ipmi_fan_speed_rpm{"));
    }

    #[test]
    fn test_overwrite_is_idempotent() {
        let metrics = SensorMetrics::new().unwrap();
        let report = "Fan1 | 04h | ok | 7.1 | 4560 RPM\n";
        record_report(&metrics, report, "bmc1");
        let once = metrics.render().unwrap();
        record_report(&metrics, report, "bmc1");
        let twice = metrics.render().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_later_value_overwrites() {
        let metrics = SensorMetrics::new().unwrap();
        record_report(&metrics, "Fan1 | 04h | ok | 7.1 | 4560 RPM", "bmc1");
        record_report(&metrics, "Fan1 | 04h | ok | 7.1 | 4680 RPM", "bmc1");
        let output = metrics.render().unwrap();
        assert!(output
            .contains("ipmi_fan_speed_rpm{host=\"bmc1\",sensor_id=\"04h\",sensor_name=\"Fan1\"} 4680"));
        assert!(!output.contains("4560"));
    }

    #[test]
    fn test_all_five_families_register() {
        let metrics = SensorMetrics::new().unwrap();
        let report = "\
            12V   | 30h | ok | 10.1 | 12.240 Volts\n\
            Temp  | 01h | ok |  3.1 | 45 degrees C\n\
            Fan1  | 04h | ok |  7.1 | 4560 RPM\n\
            PSU   | 0Ah | ok | 10.2 | 120 Watts\n\
            Amp   | 0Bh | ok | 10.3 | 1.20 Amps\n";
        record_report(&metrics, report, "bmc1");
        let output = metrics.render().unwrap();
        for family in [
            "ipmi_voltage_volts",
            "ipmi_temperature_celsius",
            "ipmi_fan_speed_rpm",
            "ipmi_power_watts",
            "ipmi_current_amperes",
        ] {
            assert!(output.contains(family), "missing {family}");
        }
    }
}

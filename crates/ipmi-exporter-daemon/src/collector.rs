//! Periodic sensor collection loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{info, warn};

use ipmi_exporter_sdr::{parse_report, ReportSource};

use crate::metrics::SensorMetrics;

/// Drives the fetch-parse-update cycle against one target host.
pub struct Collector {
    source: Arc<dyn ReportSource>,
    metrics: Arc<SensorMetrics>,
    host: String,
    interval: Duration,
}

impl Collector {
    pub fn new(
        source: Arc<dyn ReportSource>,
        metrics: Arc<SensorMetrics>,
        host: String,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            metrics,
            host,
            interval,
        }
    }

    /// Runs one collection cycle.
    ///
    /// A fetch failure is logged and skipped; previously collected values
    /// stay exposed and the next tick retries. Parsing itself never fails.
    pub async fn collect_once(&self) {
        let report = match self.source.fetch().await {
            Ok(report) => report,
            Err(e) => {
                warn!("Failed to fetch sensor report from {}: {}", self.host, e);
                return;
            }
        };

        let readings = parse_report(&report);
        for reading in &readings {
            self.metrics.record(reading, &self.host);
        }
        info!("Updated {} sensor metrics", readings.len());
    }

    /// Collects immediately, then once per interval until shutdown.
    ///
    /// Single-flow: a cycle (including the fetch, which has no timeout) runs
    /// to completion before the next sleep starts, so the loop never
    /// overlaps itself. The shutdown receiver exists for tests and orderly
    /// exit; in production the loop runs for the life of the process.
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) {
        loop {
            self.collect_once().await;
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.recv() => {
                    info!("Collection loop stopped");
                    return;
                }
            }
        }
    }
}

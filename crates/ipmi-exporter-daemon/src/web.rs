//! Metrics web endpoint.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::metrics::SensorMetrics;

/// Prometheus text exposition format content type.
const TEXT_FORMAT: &str = "text/plain; version=0.0.4";

/// Creates the web router with all routes.
pub fn create_router(metrics: Arc<SensorMetrics>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(metrics)
}

/// GET /metrics - Render all sensor gauges
async fn metrics_handler(State(metrics): State<Arc<SensorMetrics>>) -> Response {
    match metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render metrics: {}", e),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use ipmi_exporter_sdr::parse_report;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let metrics = Arc::new(SensorMetrics::new().unwrap());
        for reading in parse_report("12V | 30h | ok | 10.1 | 12.240 Volts") {
            metrics.record(&reading, "bmc1");
        }

        let app = create_router(metrics);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("ipmi_voltage_volts"));
    }
}

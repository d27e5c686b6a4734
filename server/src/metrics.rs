//! Prometheus metrics for the shop order resource.
//!
//! Two instruments are recorded, both labelled with the application and
//! resource name:
//! - `kafka_order_create_request`: counter, one per create invocation
//! - `kafka_order_create_timer`: histogram of create durations in seconds
//!
//! # Example
//!
//! ```rust,no_run
//! use kafka_order::metrics::install_recorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handle = install_recorder()?;
//! println!("{}", handle.render());
//! # Ok(())
//! # }
//! ```

use axum::extract::State;
use kafka_order_web::{AppError, WebResult};
use metrics::{Unit, counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

/// Counter incremented for every create request that reaches the handler.
pub const CREATE_REQUEST_COUNTER: &str = "kafka_order_create_request";

/// Histogram of create durations, in seconds.
pub const CREATE_TIMER: &str = "kafka_order_create_timer";

/// Value of the `application` label.
pub const APPLICATION: &str = "kafka-order";

/// Value of the `resource` label.
pub const RESOURCE: &str = "ShopOrderResource";

const CREATE_TIMER_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

fn builder() -> Result<PrometheusBuilder, MetricsError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(CREATE_TIMER.to_string()),
            CREATE_TIMER_BUCKETS,
        )
        .map_err(|e| MetricsError::Build(e.to_string()))
}

/// Install the global Prometheus recorder and describe the shop order metrics.
///
/// # Errors
///
/// Returns [`MetricsError::Install`] if a global recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let handle = builder()?
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    register_metrics();
    tracing::info!("Prometheus recorder installed");

    Ok(handle)
}

/// Register metric descriptions with the current recorder.
pub fn register_metrics() {
    describe_counter!(
        CREATE_REQUEST_COUNTER,
        Unit::Count,
        "number of orders requested"
    );
    describe_histogram!(
        CREATE_TIMER,
        Unit::Seconds,
        "timer for processing a order creation"
    );
}

/// Shop order resource metrics recorder.
pub struct ShopOrderMetrics;

impl ShopOrderMetrics {
    /// Record a create invocation.
    pub fn record_create_request() {
        counter!(CREATE_REQUEST_COUNTER, "application" => APPLICATION, "resource" => RESOURCE)
            .increment(1);
    }

    /// Record how long a create took, successful or not.
    pub fn record_create_duration(duration: Duration) {
        histogram!(CREATE_TIMER, "application" => APPLICATION, "resource" => RESOURCE)
            .record(duration.as_secs_f64());
    }
}

/// `GET /metrics`: Prometheus text exposition, or 404 when metrics are disabled.
#[allow(clippy::unused_async)]
pub async fn render_metrics(
    State(handle): State<Option<PrometheusHandle>>,
) -> WebResult<String> {
    handle
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or_else(|| AppError::not_found("Metrics are disabled"))
}

//! Health check endpoints.
//!
//! These endpoints are used by load balancers and orchestrators to verify
//! service health.

use axum::{Json, extract::State, http::StatusCode};
use kafka_order_core::ShopOrderStore;
use serde::Serialize;
use std::sync::Arc;

/// Component name reported by [`readiness_check`].
pub const STORE_COMPONENT: &str = "shop_order_store";

/// Health of a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    /// Component is serving requests.
    Healthy,
    /// Component cannot serve requests.
    Unhealthy,
}

/// Readiness report body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Checked component.
    pub component: &'static str,
    /// Outcome.
    pub status: HealthStatus,
    /// Human-readable detail.
    pub message: String,
}

/// Simple health check endpoint (for basic liveness).
///
/// Returns 200 OK to indicate the service is running.
/// This endpoint does NOT check dependencies (database, etc.).
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness check: pings the shop order store.
///
/// # Status Codes
///
/// - 200 OK: the store answered
/// - 503 Service Unavailable: the store failed
///
/// # Endpoint
///
/// ```text
/// GET /health/ready
/// ```
///
/// # Response
///
/// ```json
/// {
///   "component": "shop_order_store",
///   "status": "Healthy",
///   "message": "Store is reachable"
/// }
/// ```
pub async fn readiness_check(
    State(store): State<Arc<dyn ShopOrderStore>>,
) -> (StatusCode, Json<HealthReport>) {
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthReport {
                component: STORE_COMPONENT,
                status: HealthStatus::Healthy,
                message: "Store is reachable".to_string(),
            }),
        ),
        Err(error) => {
            tracing::warn!(error = %error, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport {
                    component: STORE_COMPONENT,
                    status: HealthStatus::Unhealthy,
                    message: error.to_string(),
                }),
            )
        }
    }
}

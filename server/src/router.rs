//! Shop order HTTP router.
//!
//! Composes the resource, health and metrics handlers into a single Axum router.

use axum::{Router, middleware::from_fn, routing::get};
use kafka_order_web::handlers::{health_check, readiness_check};
use kafka_order_web::track_correlation_id;
use tower_http::trace::TraceLayer;

use crate::metrics::render_metrics;
use crate::resource;
use crate::state::AppState;

/// Create the application router with all endpoints.
///
/// # Routes
///
/// - `GET /shop-orders` - List shop orders
/// - `POST /shop-orders` - Create a shop order
/// - `GET /health` - Liveness
/// - `GET /health/ready` - Readiness (pings the store)
/// - `GET /metrics` - Prometheus exposition
///
/// Every response carries an `X-Correlation-ID` header.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/shop-orders",
            get(resource::list_shop_orders).post(resource::create_shop_order),
        )
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/metrics", get(render_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(track_correlation_id))
        .with_state(state)
}

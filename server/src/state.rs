//! Application state for the shop order HTTP server.

use axum::extract::FromRef;
use kafka_order_core::{ShopOrderService, ShopOrderStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// Shop order service (owns the store)
    pub orders: ShopOrderService,

    /// Prometheus handle; `None` when metrics are disabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub const fn new(orders: ShopOrderService, metrics: Option<PrometheusHandle>) -> Self {
        Self { orders, metrics }
    }
}

impl FromRef<AppState> for ShopOrderService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.orders.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ShopOrderStore> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(app_state.orders.store())
    }
}

impl FromRef<AppState> for Option<PrometheusHandle> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.metrics.clone()
    }
}

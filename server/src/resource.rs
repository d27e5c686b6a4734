//! HTTP handlers for the `/shop-orders` resource.

use axum::{Json, extract::State};
use kafka_order_core::{ShopOrder, ShopOrderRequest, ShopOrderService, StoreError};
use kafka_order_web::{CorrelationId, WebResult};
use std::time::Instant;

use crate::metrics::ShopOrderMetrics;

/// List every persisted shop order.
///
/// # Endpoint
///
/// ```text
/// GET /shop-orders
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "item": "widget", "quantity": 3 }
/// ]
/// ```
pub async fn list_shop_orders(
    State(orders): State<ShopOrderService>,
) -> WebResult<Json<Vec<ShopOrder>>> {
    let orders = orders.list_all().await?;
    Ok(Json(orders))
}

/// Create a shop order inside a single transaction.
///
/// Counts the invocation and times it whether or not it succeeds. On any
/// failure the transaction is rolled back and nothing becomes visible.
///
/// # Endpoint
///
/// ```text
/// POST /shop-orders
/// Content-Type: application/json
///
/// { "item": "widget", "quantity": 3 }
/// ```
///
/// # Response
///
/// `200 OK`
///
/// ```json
/// { "id": 1, "item": "widget", "quantity": 3 }
/// ```
pub async fn create_shop_order(
    State(orders): State<ShopOrderService>,
    correlation_id: CorrelationId,
    Json(request): Json<ShopOrderRequest>,
) -> WebResult<Json<ShopOrder>> {
    ShopOrderMetrics::record_create_request();
    let started = Instant::now();

    let result = create_in_transaction(&orders, request).await;

    ShopOrderMetrics::record_create_duration(started.elapsed());

    let order = result?;
    tracing::info!(
        correlation_id = %correlation_id.0,
        order_id = %order.id,
        "Shop order created"
    );

    Ok(Json(order))
}

async fn create_in_transaction(
    orders: &ShopOrderService,
    request: ShopOrderRequest,
) -> Result<ShopOrder, StoreError> {
    let mut tx = orders.begin().await?;

    let created = orders.create_order(tx.as_mut(), request).await;

    match created {
        Ok(order) => {
            tx.commit().await?;
            Ok(order)
        }
        Err(error) => {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(error = %rollback_error, "Rollback failed");
            }
            Err(error)
        }
    }
}

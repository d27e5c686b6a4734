//! HTTP tests for the shop order API against the in-memory store.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use kafka_order::{AppState, build_router};
use kafka_order_core::{ShopOrder, ShopOrderService};
use kafka_order_testing::{InMemoryShopOrderStore, fixtures};
use kafka_order_web::CORRELATION_ID_HEADER;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with_store() -> (axum::Router, InMemoryShopOrderStore) {
    let store = InMemoryShopOrderStore::new();
    let state = AppState::new(ShopOrderService::new(Arc::new(store.clone())), None);
    (build_router(state), store)
}

fn test_server() -> (TestServer, InMemoryShopOrderStore) {
    let (app, store) = app_with_store();
    (TestServer::new(app).expect("router should serve"), store)
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let (server, _) = test_server();

    let response = server.get("/shop-orders").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_returns_order_with_generated_id() {
    let (server, _) = test_server();

    let response = server
        .post("/shop-orders")
        .json(&json!({ "item": "widget", "quantity": 3 }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 1, "item": "widget", "quantity": 3 })
    );
}

#[tokio::test]
async fn test_created_order_is_listed_exactly_once() {
    let (server, _) = test_server();

    let created: ShopOrder = server
        .post("/shop-orders")
        .json(&fixtures::widget())
        .await
        .json();

    let listed: Vec<ShopOrder> = server.get("/shop-orders").await.json();

    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (server, _) = test_server();

    for request in fixtures::distinct_requests(3) {
        server.post("/shop-orders").json(&request).await.assert_status_ok();
    }

    let listed: Vec<ShopOrder> = server.get("/shop-orders").await.json();
    let ids: Vec<i64> = listed.iter().map(|o| o.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(listed[1].item, "item-1");
}

#[tokio::test]
async fn test_malformed_body_is_rejected_without_persisting() {
    let (server, store) = test_server();

    let response = server
        .post("/shop-orders")
        .bytes(Bytes::from_static(b"{ not json"))
        .content_type("application/json")
        .await;

    assert!(response.status_code().is_client_error());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_negative_quantity_is_rejected() {
    let (server, store) = test_server();

    let response = server
        .post("/shop-orders")
        .json(&json!({ "item": "widget", "quantity": -1 }))
        .await;

    assert!(response.status_code().is_client_error());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_persist_failure_is_internal_error_and_leaves_nothing() {
    let (server, store) = test_server();
    store.fail_persist(true);

    let response = server.post("/shop-orders").json(&fixtures::widget()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "INTERNAL_SERVER_ERROR");

    store.fail_persist(false);
    let listed: Vec<ShopOrder> = server.get("/shop-orders").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_commit_failure_is_internal_error_and_leaves_nothing() {
    let (server, store) = test_server();
    store.fail_commit(true);

    let response = server.post("/shop-orders").json(&fixtures::widget()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_list_failure_is_internal_error() {
    let (server, store) = test_server();
    store.fail_list(true);

    let response = server.get("/shop-orders").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    // Store details stay in the logs
    assert_eq!(
        response.json::<Value>()["message"],
        "An internal error occurred"
    );
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (app, _) = app_with_store();

    let handles: Vec<_> = fixtures::distinct_requests(16)
        .into_iter()
        .map(|request| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::builder()
                    .method("POST")
                    .uri("/shop-orders")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&request).unwrap()))
                    .unwrap();
                let response = app.oneshot(request).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap();
                serde_json::from_slice::<ShopOrder>(&body).unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().id);
    }
    assert_eq!(ids.len(), 16);

    let request = Request::builder()
        .uri("/shop-orders")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let listed: Vec<ShopOrder> = serde_json::from_slice(&body).unwrap();
    assert_eq!(listed.len(), 16);
}

#[tokio::test]
async fn test_responses_carry_correlation_id() {
    let (server, _) = test_server();
    let correlation_id = "6f1c2e1a-8f4b-4f8e-9a53-2b8d7c1e0f42";

    let response = server
        .get("/shop-orders")
        .add_header(
            CORRELATION_ID_HEADER.parse::<axum::http::HeaderName>().unwrap(),
            correlation_id.parse::<axum::http::HeaderValue>().unwrap(),
        )
        .await;

    assert_eq!(response.header(CORRELATION_ID_HEADER), correlation_id);

    let created = server.post("/shop-orders").json(&fixtures::widget()).await;
    assert!(created.headers().get(CORRELATION_ID_HEADER).is_some());
}

#[tokio::test]
async fn test_health_endpoints() {
    let (server, store) = test_server();

    let live = server.get("/health").await;
    live.assert_status_ok();
    live.assert_text("ok");

    server.get("/health/ready").await.assert_status_ok();

    store.set_unavailable(true);
    let ready = server.get("/health/ready").await;
    ready.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ready.json::<Value>()["status"], "Unhealthy");
}

#[tokio::test]
async fn test_metrics_endpoint_is_not_found_when_disabled() {
    let (server, _) = test_server();

    let response = server.get("/metrics").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], "NOT_FOUND");
}

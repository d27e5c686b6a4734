//! Tests for `ShopOrderService` against the in-memory store.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use kafka_order_core::{ShopOrder, ShopOrderRequest, ShopOrderService, ShopOrderStore, StoreError};
use kafka_order_testing::{InMemoryShopOrderStore, fixtures};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn service_with_store() -> (ShopOrderService, InMemoryShopOrderStore) {
    let store = InMemoryShopOrderStore::new();
    let service = ShopOrderService::new(Arc::new(store.clone()));
    (service, store)
}

async fn create_committed(service: &ShopOrderService, request: ShopOrderRequest) -> ShopOrder {
    let mut tx = service.begin().await.unwrap();
    let order = service.create_order(tx.as_mut(), request).await.unwrap();
    tx.commit().await.unwrap();
    order
}

#[tokio::test]
async fn test_list_all_on_empty_store() {
    let (service, _) = service_with_store();
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_then_list_contains_order_once() {
    let (service, _) = service_with_store();

    let order = create_committed(&service, fixtures::widget()).await;

    assert_eq!(order.id.value(), 1);
    assert_eq!(order.item, "widget");
    assert_eq!(order.quantity, 3);

    let listed = service.list_all().await.unwrap();
    assert_eq!(listed.iter().filter(|o| o.id == order.id).count(), 1);
    assert_eq!(listed, vec![order]);
}

#[tokio::test]
async fn test_persist_failure_leaves_no_order() {
    let (service, store) = service_with_store();
    store.fail_persist(true);

    let mut tx = service.begin().await.unwrap();
    let result = service.create_order(tx.as_mut(), fixtures::widget()).await;
    assert!(matches!(result, Err(StoreError::Database(_))));
    tx.rollback().await.unwrap();

    store.fail_persist(false);
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_uncommitted_create_is_not_listed() {
    let (service, _) = service_with_store();

    let mut tx = service.begin().await.unwrap();
    service.create_order(tx.as_mut(), fixtures::widget()).await.unwrap();

    assert!(service.list_all().await.unwrap().is_empty());
    drop(tx);
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (service, _) = service_with_store();
    let requests = fixtures::distinct_requests(32);

    let handles: Vec<_> = requests
        .iter()
        .cloned()
        .map(|request| {
            let service = service.clone();
            tokio::spawn(async move { create_committed(&service, request).await })
        })
        .collect();

    let mut created = Vec::new();
    for handle in handles {
        created.push(handle.await.unwrap());
    }

    let ids: HashSet<_> = created.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), requests.len());

    let listed = service.list_all().await.unwrap();
    assert_eq!(listed.len(), requests.len());
    for order in &created {
        assert!(listed.contains(order));
    }
}

#[tokio::test]
async fn test_service_exposes_backing_store() {
    let (service, store) = service_with_store();
    store.set_unavailable(true);
    assert!(service.store().ping().await.is_err());
}

proptest! {
    #[test]
    fn prop_created_order_matches_request(item in "[a-zA-Z0-9 ]{0,40}", quantity in any::<u32>()) {
        let (service, _) = service_with_store();
        let request = ShopOrderRequest::new(item.clone(), quantity);

        let (order, listed) = tokio_test::block_on(async {
            let order = create_committed(&service, request).await;
            (order, service.list_all().await.unwrap())
        });

        prop_assert!(order.id.value() > 0);
        prop_assert_eq!(&order.item, &item);
        prop_assert_eq!(order.quantity, quantity);
        prop_assert_eq!(listed, vec![order]);
    }
}

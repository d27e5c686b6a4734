//! # Kafka Order Testing
//!
//! Testing utilities for the kafka-order service.
//!
//! This crate provides:
//! - [`InMemoryShopOrderStore`]: a transactional in-memory store with failure injection
//! - [`fixtures`]: ready-made requests for tests
//!
//! ## Example
//!
//! ```ignore
//! use kafka_order_testing::{fixtures, InMemoryShopOrderStore};
//!
//! #[tokio::test]
//! async fn test_rollback_on_commit_failure() {
//!     let store = InMemoryShopOrderStore::new();
//!     store.fail_commit(true);
//!
//!     let app = build_router(AppState::new(ShopOrderService::new(Arc::new(store.clone())), None));
//!     // POST fixtures::widget() ... expect 500
//!
//!     assert!(store.is_empty().await);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

mod order_store;

pub use order_store::InMemoryShopOrderStore;

/// Request fixtures.
pub mod fixtures {
    use kafka_order_core::ShopOrderRequest;

    /// The canonical example request: three widgets.
    #[must_use]
    pub fn widget() -> ShopOrderRequest {
        ShopOrderRequest::new("widget", 3)
    }

    /// `count` requests with pairwise distinct payloads.
    ///
    /// # Example
    ///
    /// ```
    /// use kafka_order_testing::fixtures::distinct_requests;
    ///
    /// let requests = distinct_requests(3);
    /// assert_eq!(requests[2].item, "item-2");
    /// assert_eq!(requests[2].quantity, 3);
    /// ```
    #[must_use]
    pub fn distinct_requests(count: u32) -> Vec<ShopOrderRequest> {
        (0..count)
            .map(|n| ShopOrderRequest::new(format!("item-{n}"), n + 1))
            .collect()
    }
}

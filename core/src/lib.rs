//! # Kafka Order Core
//!
//! Domain types and collaborators behind the shop order resource.
//!
//! ## Building Blocks
//!
//! - **`ShopOrder`**: a persisted shop purchase request with a store-assigned id
//! - **`ShopOrderRequest`**: the client-submitted payload used to create an order
//! - **`ShopOrderStore`**: persistence capability (list, transactional insert, ping)
//! - **`ShopOrderService`**: builds orders from requests and delegates to the store
//!
//! ## Flow
//!
//! ```text
//! client ──▶ ShopOrderResource ──▶ ShopOrderService ──▶ ShopOrderStore
//!                 (web)                 (core)          (postgres / in-memory)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use kafka_order_core::{ShopOrderRequest, ShopOrderService};
//!
//! let service = ShopOrderService::new(store);
//!
//! let mut tx = service.begin().await?;
//! let order = service
//!     .create_order(tx.as_mut(), ShopOrderRequest::new("widget", 3))
//!     .await?;
//! tx.commit().await?;
//!
//! assert_eq!(service.list_all().await?, vec![order]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod order;
pub mod service;
pub mod store;

pub use order::{NewShopOrder, ShopOrder, ShopOrderId, ShopOrderRequest};
pub use service::ShopOrderService;
pub use store::{ShopOrderStore, ShopOrderTransaction, StoreError, StoreFuture};

//! Persistence abstraction for shop orders.
//!
//! The store exposes reads directly and writes only through a
//! [`ShopOrderTransaction`]. A transaction is the unit of atomicity: orders
//! persisted through it become visible to readers on [`commit`], and vanish on
//! [`rollback`] or when the transaction is dropped uncommitted.
//!
//! # Implementations
//!
//! - `PostgresShopOrderStore` (in `kafka-order-postgres`): production storage
//! - `InMemoryShopOrderStore` (in `kafka-order-testing`): tests and local runs
//!
//! # Dyn Compatibility
//!
//! Methods return boxed futures instead of using `async fn` so the store can be
//! shared as `Arc<dyn ShopOrderStore>` and transactions handed out as
//! `Box<dyn ShopOrderTransaction>`.
//!
//! [`commit`]: ShopOrderTransaction::commit
//! [`rollback`]: ShopOrderTransaction::rollback

use crate::order::{NewShopOrder, ShopOrder};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Errors that can occur during store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Query or statement failed.
    #[error("Database error: {0}")]
    Database(String),

    /// The store cannot be reached (pool exhausted, connection refused, ...).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be mapped to a [`ShopOrder`].
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Beginning, committing or rolling back a transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

/// Shop order persistence.
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// request handler.
pub trait ShopOrderStore: Send + Sync {
    /// Load every committed order.
    ///
    /// Iteration order is store-defined. An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// - `Database` / `Unavailable`: the read failed
    /// - `InvalidData`: a row could not be decoded
    fn list_all(&self) -> StoreFuture<'_, Vec<ShopOrder>>;

    /// Open a transaction.
    ///
    /// # Errors
    ///
    /// - `Unavailable`: no connection could be acquired
    /// - `TransactionFailed`: the transaction could not be started
    fn begin(&self) -> StoreFuture<'_, Box<dyn ShopOrderTransaction>>;

    /// Check that the store can serve requests.
    ///
    /// # Errors
    ///
    /// Returns the reason the store is not ready.
    fn ping(&self) -> StoreFuture<'_, ()>;
}

/// An open store transaction.
///
/// Dropping a transaction without calling [`commit`](Self::commit) discards
/// everything persisted through it.
pub trait ShopOrderTransaction: Send {
    /// Insert an order and return it with its assigned identifier.
    ///
    /// The order is not visible outside this transaction until commit.
    ///
    /// # Errors
    ///
    /// - `Database`: the insert failed
    /// - `InvalidData`: the order cannot be represented in the store
    fn persist(&mut self, order: NewShopOrder) -> StoreFuture<'_, ShopOrder>;

    /// Make every persisted order visible atomically.
    ///
    /// # Errors
    ///
    /// `TransactionFailed` if the commit did not happen; nothing is stored then.
    fn commit(self: Box<Self>) -> StoreFuture<'static, ()>;

    /// Discard every persisted order.
    ///
    /// # Errors
    ///
    /// `TransactionFailed` if the rollback could not be confirmed.
    fn rollback(self: Box<Self>) -> StoreFuture<'static, ()>;
}

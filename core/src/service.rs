//! Shop order service.
//!
//! The service is the only place that turns a [`ShopOrderRequest`] into an
//! order. It never opens or closes transactions on its own when creating: the
//! caller owns the transaction scope and decides whether to commit.

use crate::order::{NewShopOrder, ShopOrder, ShopOrderRequest};
use crate::store::{ShopOrderStore, ShopOrderTransaction, StoreError};
use std::sync::Arc;

/// Business operations on shop orders.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct ShopOrderService {
    store: Arc<dyn ShopOrderStore>,
}

impl ShopOrderService {
    /// Create a service backed by `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ShopOrderStore>) -> Self {
        Self { store }
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn ShopOrderStore> {
        &self.store
    }

    /// Every committed order, in store order.
    ///
    /// # Errors
    ///
    /// Propagates the store's read error.
    pub async fn list_all(&self) -> Result<Vec<ShopOrder>, StoreError> {
        self.store.list_all().await
    }

    /// Open a transaction to create orders in.
    ///
    /// # Errors
    ///
    /// Propagates the store's error when no transaction can be started.
    pub async fn begin(&self) -> Result<Box<dyn ShopOrderTransaction>, StoreError> {
        self.store.begin().await
    }

    /// Build an order from `request` and persist it inside `tx`.
    ///
    /// The order is persisted exactly once. It only becomes visible once the
    /// caller commits `tx`.
    ///
    /// # Errors
    ///
    /// Propagates the store's error; `tx` should then be rolled back.
    pub async fn create_order(
        &self,
        tx: &mut dyn ShopOrderTransaction,
        request: ShopOrderRequest,
    ) -> Result<ShopOrder, StoreError> {
        let new_order = NewShopOrder::from(request);
        let order = tx.persist(new_order).await?;

        tracing::debug!(
            order_id = %order.id,
            item = %order.item,
            quantity = order.quantity,
            "Shop order persisted"
        );

        Ok(order)
    }
}

impl std::fmt::Debug for ShopOrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopOrderService").finish_non_exhaustive()
    }
}

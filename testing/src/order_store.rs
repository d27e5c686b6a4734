//! In-memory shop order store.
//!
//! Provides fast, deterministic storage for tests and for running the service
//! without a database:
//! - [`InMemoryShopOrderStore`]: `Vec`-backed store with transactional inserts
//! - failure injection for persist, commit, list and availability

use kafka_order_core::{
    NewShopOrder, ShopOrder, ShopOrderId, ShopOrderStore, ShopOrderTransaction, StoreError,
    StoreFuture,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory shop order store.
///
/// Orders persisted through a transaction are buffered in the transaction and
/// appended to the store in one step on commit, so readers never see a
/// partially created order. Identifiers come from a shared counter starting at
/// 1; identifiers handed out by rolled-back transactions are not reused.
///
/// # Example
///
/// ```
/// use kafka_order_core::{ShopOrderRequest, ShopOrderService};
/// use kafka_order_testing::InMemoryShopOrderStore;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = ShopOrderService::new(Arc::new(InMemoryShopOrderStore::new()));
///
/// let mut tx = service.begin().await?;
/// let order = service
///     .create_order(tx.as_mut(), ShopOrderRequest::new("widget", 3))
///     .await?;
/// tx.commit().await?;
///
/// assert_eq!(order.id.value(), 1);
/// assert_eq!(service.list_all().await?, vec![order]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryShopOrderStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    orders: RwLock<Vec<ShopOrder>>,
    next_id: AtomicI64,
    faults: Faults,
}

#[derive(Debug, Default)]
struct Faults {
    persist: AtomicBool,
    commit: AtomicBool,
    list: AtomicBool,
    unavailable: AtomicBool,
}

impl InMemoryShopOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `persist` fail with [`StoreError::Database`].
    pub fn fail_persist(&self, fail: bool) {
        self.inner.faults.persist.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `commit` fail with [`StoreError::TransactionFailed`].
    ///
    /// Orders buffered in the failing transaction are discarded.
    pub fn fail_commit(&self, fail: bool) {
        self.inner.faults.commit.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `list_all` fail with [`StoreError::Database`].
    pub fn fail_list(&self, fail: bool) {
        self.inner.faults.list.store(fail, Ordering::SeqCst);
    }

    /// Simulate an unreachable store: `begin`, `list_all` and `ping` fail with
    /// [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.faults.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of committed orders.
    pub async fn len(&self) -> usize {
        self.inner.orders.read().await.len()
    }

    /// Whether no order has been committed.
    pub async fn is_empty(&self) -> bool {
        self.inner.orders.read().await.is_empty()
    }

    /// Remove every committed order (identifiers keep counting).
    pub async fn clear(&self) {
        self.inner.orders.write().await.clear();
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.inner.faults.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl ShopOrderStore for InMemoryShopOrderStore {
    fn list_all(&self) -> StoreFuture<'_, Vec<ShopOrder>> {
        Box::pin(async move {
            self.check_available()?;
            if self.inner.faults.list.load(Ordering::SeqCst) {
                return Err(StoreError::Database("injected list failure".to_string()));
            }
            Ok(self.inner.orders.read().await.clone())
        })
    }

    fn begin(&self) -> StoreFuture<'_, Box<dyn ShopOrderTransaction>> {
        Box::pin(async move {
            self.check_available()?;
            let tx: Box<dyn ShopOrderTransaction> = Box::new(InMemoryTransaction {
                inner: Arc::clone(&self.inner),
                pending: Vec::new(),
            });
            Ok(tx)
        })
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(async move { self.check_available() })
    }
}

/// Transaction buffering orders until commit.
struct InMemoryTransaction {
    inner: Arc<Inner>,
    pending: Vec<ShopOrder>,
}

impl ShopOrderTransaction for InMemoryTransaction {
    fn persist(&mut self, order: NewShopOrder) -> StoreFuture<'_, ShopOrder> {
        Box::pin(async move {
            if self.inner.faults.persist.load(Ordering::SeqCst) {
                return Err(StoreError::Database("injected persist failure".to_string()));
            }

            let id = ShopOrderId::new(self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            let order = order.into_persisted(id);
            self.pending.push(order.clone());
            Ok(order)
        })
    }

    fn commit(self: Box<Self>) -> StoreFuture<'static, ()> {
        let Self { inner, pending } = *self;
        Box::pin(async move {
            if inner.faults.commit.load(Ordering::SeqCst) {
                return Err(StoreError::TransactionFailed(
                    "injected commit failure".to_string(),
                ));
            }
            inner.orders.write().await.extend(pending);
            Ok(())
        })
    }

    fn rollback(self: Box<Self>) -> StoreFuture<'static, ()> {
        drop(self);
        Box::pin(async { Ok(()) })
    }
}

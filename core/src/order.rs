//! Shop order types.
//!
//! An order exists in three shapes:
//!
//! - [`ShopOrderRequest`]: what the client sends (no id)
//! - [`NewShopOrder`]: what the service hands to the store (still no id)
//! - [`ShopOrder`]: what the store returns once the row exists (with id)
//!
//! Conversion only runs in that direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a shop order.
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopOrderId(i64);

impl ShopOrderId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ShopOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-submitted payload for creating a shop order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopOrderRequest {
    /// Ordered item.
    pub item: String,

    /// Number of units.
    pub quantity: u32,
}

impl ShopOrderRequest {
    /// Create a request.
    #[must_use]
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

/// An order that has been built but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShopOrder {
    /// Ordered item.
    pub item: String,

    /// Number of units.
    pub quantity: u32,
}

impl NewShopOrder {
    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn into_persisted(self, id: ShopOrderId) -> ShopOrder {
        ShopOrder {
            id,
            item: self.item,
            quantity: self.quantity,
        }
    }
}

impl From<ShopOrderRequest> for NewShopOrder {
    fn from(request: ShopOrderRequest) -> Self {
        Self {
            item: request.item,
            quantity: request.quantity,
        }
    }
}

/// A persisted shop order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopOrder {
    /// Identifier assigned by the store at creation time.
    pub id: ShopOrderId,

    /// Ordered item.
    pub item: String,

    /// Number of units.
    pub quantity: u32,
}

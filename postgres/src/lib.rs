//! `PostgreSQL` shop order store for the kafka-order service.
//!
//! This crate provides a PostgreSQL-based store that implements the
//! `ShopOrderStore` trait from `kafka-order-core`. It uses sqlx and supports:
//!
//! - Transactional inserts (`BEGIN` / `COMMIT` / `ROLLBACK`)
//! - Connection pooling
//! - Embedded migrations
//!
//! # Example
//!
//! ```ignore
//! use kafka_order_postgres::{PoolSettings, PostgresShopOrderStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PostgresShopOrderStore::connect("postgres://localhost/mydb", PoolSettings::default()).await?;
//!     store.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::{PoolSettings, PostgresShopOrderStore};

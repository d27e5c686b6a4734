//! # Kafka Order
//!
//! HTTP service that lists and creates shop orders.
//!
//! - `GET /shop-orders` returns every persisted order
//! - `POST /shop-orders` creates one order in a single transaction and
//!   returns it with its generated id
//!
//! Create requests are counted and timed through the [`metrics`] module and
//! exposed at `/metrics`.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bootstrap;
pub mod config;
pub mod metrics;
pub mod resource;
pub mod router;
pub mod state;

pub use config::{Config, ConfigError};
pub use router::build_router;
pub use state::AppState;

//! Axum integration for the kafka-order service.
//!
//! This crate holds the HTTP plumbing that is independent of the shop order
//! resource itself:
//!
//! - [`AppError`]: maps store failures to JSON error responses
//! - [`CorrelationId`] and [`track_correlation_id`]: per-request correlation
//! - [`handlers::health`]: liveness and readiness endpoints
//!
//! # Request Flow
//!
//! 1. **Correlation middleware** tags the request and opens a tracing span
//! 2. **Extract** the JSON body (malformed input is rejected here with 4xx)
//! 3. **Delegate** to `ShopOrderService`
//! 4. **Map** the result: `Json<T>` on success, [`AppError`] otherwise

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;

pub use error::AppError;
pub use extractors::CorrelationId;
pub use middleware::{CORRELATION_ID_HEADER, track_correlation_id};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

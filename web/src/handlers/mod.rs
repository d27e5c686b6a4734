//! HTTP request handlers shared by every kafka-order deployment.

pub mod health;

pub use health::{health_check, readiness_check};

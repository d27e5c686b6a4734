//! Startup wiring: store selection and tracing.

use kafka_order_core::{ShopOrderStore, StoreError};
use kafka_order_postgres::PostgresShopOrderStore;
use kafka_order_testing::InMemoryShopOrderStore;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DatabaseConfig;

/// Build the shop order store described by `config`.
///
/// Connects to `PostgreSQL` (and applies migrations if enabled) when a URL is
/// configured, otherwise falls back to the in-memory store.
///
/// # Errors
///
/// Returns [`StoreError`] if the database cannot be reached or migrated.
pub async fn build_store(config: &DatabaseConfig) -> Result<Arc<dyn ShopOrderStore>, StoreError> {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, shop orders are kept in memory");
        return Ok(Arc::new(InMemoryShopOrderStore::new()));
    };

    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );
    let store = PostgresShopOrderStore::connect(url, config.pool_settings()).await?;

    if config.run_migrations {
        store.migrate().await?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(store))
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins; otherwise `log_level` applies to this service and `tower_http`.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("kafka_order={log_level},tower_http={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

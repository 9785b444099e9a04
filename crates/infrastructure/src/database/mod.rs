use async_trait::async_trait;
use parkstat_application::ports::DatabaseProbe;
use parkstat_domain::config::DatabaseConfig;
use parkstat_domain::DomainError;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::time::Duration;
use tracing::{error, instrument};

/// Creates the shared connection pool.
///
/// Every repository borrows connections from this pool; a connection goes
/// back to it when the query future completes or is dropped.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    let url = cfg.connection_url();
    let mut options = AnyPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_seconds))
        .test_before_acquire(true);

    // Each in-memory SQLite connection is its own database
    if url.starts_with("sqlite::memory:") {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    options.connect(&url).await
}

pub struct SqlDatabaseProbe {
    pool: AnyPool,
}

impl SqlDatabaseProbe {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseProbe for SqlDatabaseProbe {
    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Database ping failed");
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(())
    }
}

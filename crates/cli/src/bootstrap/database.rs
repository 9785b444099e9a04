use parkstat_domain::config::DatabaseConfig;
use parkstat_infrastructure::database::create_pool;
use sqlx::AnyPool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<AnyPool> {
    info!(url = %cfg.redacted_url(), "Initializing database");

    let pool = create_pool(cfg).await.map_err(|e| {
        error!(error = %e, "Failed to initialize database pool");
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        acquire_timeout_seconds = cfg.acquire_timeout_seconds,
        "Database initialized successfully"
    );

    Ok(pool)
}

use crate::{errors::ApiError, state::AppState};
use axum::extract::State;
use tracing::{debug, error};

pub async fn health_check(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    debug!("Health check requested");

    state.check_health.execute().await.map_err(|e| {
        error!(error = %e, "Health check failed");
        ApiError::Unavailable("Database unavailable".to_string())
    })?;

    Ok("OK")
}

use crate::{dto::ParkResponse, errors::ApiError, state::AppState};
use axum::{extract::State, Json};
use parkstat_domain::DomainError;
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_zones")]
pub async fn get_zones(State(state): State<AppState>) -> Result<Json<Vec<ParkResponse>>, ApiError> {
    match state.get_zones.execute().await {
        Ok(zones) => {
            debug!(count = zones.len(), "Parking zones retrieved");
            Ok(Json(zones.into_iter().map(Into::into).collect()))
        }
        Err(DomainError::NotFound(msg)) => Err(ApiError::NotFound(msg)),
        Err(e) => {
            error!(error = %e, "Failed to get parking zone data");
            Err(ApiError::from_domain(
                e,
                "Internal server error, failed to get data",
            ))
        }
    }
}

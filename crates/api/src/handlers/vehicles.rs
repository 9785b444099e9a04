use crate::{dto::VehicleResponse, errors::ApiError, state::AppState};
use axum::{extract::State, Json};
use parkstat_domain::DomainError;
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_vehicles")]
pub async fn get_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    match state.get_vehicles.execute().await {
        Ok(rows) => {
            debug!(count = rows.len(), "Vehicle data retrieved");
            Ok(Json(rows.into_iter().map(Into::into).collect()))
        }
        Err(DomainError::NotFound(msg)) => Err(ApiError::NotFound(msg)),
        Err(e) => {
            error!(error = %e, "Failed to get vehicle data");
            Err(ApiError::from_domain(
                e,
                "Internal server error, failed to get data",
            ))
        }
    }
}

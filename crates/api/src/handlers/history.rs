use crate::{
    dto::{AvailabilityResponse, HistoryQuery},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use parkstat_domain::{TimeRange, ZoneId};
use tracing::{debug, error, instrument};

const INTERNAL_MESSAGE: &str = "Internal server error, failed to get historical data";

#[instrument(skip(state, query), name = "api_get_history")]
pub async fn get_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<AvailabilityResponse>>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    debug!(
        start = params.start_timestamp,
        end = params.end_timestamp,
        location = params.location_id,
        "Fetching availability history"
    );

    let range = TimeRange::from_millis(params.start_timestamp, params.end_timestamp)
        .map_err(|e| ApiError::from_domain(e, INTERNAL_MESSAGE))?;

    match state
        .get_history
        .execute(ZoneId(params.location_id), range)
        .await
    {
        Ok(samples) => {
            debug!(slots = samples.len(), "Availability history computed");
            Ok(Json(samples.into_iter().map(Into::into).collect()))
        }
        Err(e) => {
            if !e.is_client_error() {
                error!(error = %e, "Failed to get historical data");
            }
            Err(ApiError::from_domain(e, INTERNAL_MESSAGE))
        }
    }
}

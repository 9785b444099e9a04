use parkstat_domain::AvailabilitySample;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AvailabilityResponse {
    pub time: String,
    pub availability: f64,
}

impl From<AvailabilitySample> for AvailabilityResponse {
    fn from(sample: AvailabilitySample) -> Self {
        Self {
            time: sample.time,
            availability: sample.availability,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    /// Epoch milliseconds
    pub start_timestamp: i64,
    /// Epoch milliseconds
    pub end_timestamp: i64,
    pub location_id: i64,
}

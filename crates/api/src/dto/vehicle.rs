use parkstat_domain::VehicleRegistration;
use serde::Serialize;

/// Keeps the column names of the statistics table, which the frontend reads as-is.
#[derive(Serialize, Debug, Clone)]
pub struct VehicleResponse {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "Value")]
    pub value: i64,
}

impl From<VehicleRegistration> for VehicleResponse {
    fn from(row: VehicleRegistration) -> Self {
        Self {
            state: row.state,
            year: row.year,
            value: row.value,
        }
    }
}

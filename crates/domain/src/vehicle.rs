use serde::{Deserialize, Serialize};

/// One row of the vehicle registration statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRegistration {
    pub state: String,
    pub year: i64,
    pub value: i64,
}

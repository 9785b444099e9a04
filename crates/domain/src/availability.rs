use crate::sensor::SensorStatusCount;
use crate::time_range::HourSlot;
use serde::{Deserialize, Serialize};

/// Availability of one zone during one hourly slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySample {
    /// Hour-of-day label such as `"8:00"`.
    pub time: String,
    /// Percentage of unoccupied readings, `0.0..=100.0`.
    pub availability: f64,
}

impl AvailabilitySample {
    pub fn from_slot(slot: HourSlot, counts: SensorStatusCount) -> Self {
        Self {
            time: slot.label,
            availability: counts.availability_percent(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Occupancy status reported by an on-street bay sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorStatus {
    Unoccupied,
    Present,
}

impl SensorStatus {
    /// Statuses that count towards a slot's total.
    pub const RECOGNIZED: [SensorStatus; 2] = [SensorStatus::Unoccupied, SensorStatus::Present];

    /// Value stored in the `Status_Description` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Unoccupied => "Unoccupied",
            SensorStatus::Present => "Present",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Unoccupied" => Some(SensorStatus::Unoccupied),
            "Present" => Some(SensorStatus::Present),
            _ => None,
        }
    }
}

/// Reading counts for one zone over one hourly slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorStatusCount {
    pub total: u64,
    pub unoccupied: u64,
}

impl SensorStatusCount {
    pub fn new(total: u64, unoccupied: u64) -> Self {
        Self { total, unoccupied }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of unoccupied readings as a percentage rounded to one decimal.
    ///
    /// An empty slot is reported as `0.0`.
    pub fn availability_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let ratio = self.unoccupied as f64 / self.total as f64 * 100.0;
        round_one_decimal(ratio.clamp(0.0, 100.0))
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parking zone identifier as stored in the `Zone_Number` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub i64);

impl From<i64> for ZoneId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry of the zone lookup list shown by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingZone {
    pub id: i64,
    pub name: String,
}

/// Raw row linking a parking zone to a street segment. Either column may be null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingZoneRecord {
    pub zone: Option<i64>,
    pub street: Option<String>,
}

impl ParkingZoneRecord {
    pub fn new(zone: Option<i64>, street: Option<String>) -> Self {
        Self { zone, street }
    }

    /// Converts the row into a lookup entry, dropping rows with a
    /// null or zero id, or a null or empty name.
    pub fn into_zone(self) -> Option<ParkingZone> {
        let id = self.zone.filter(|id| *id != 0)?;
        let name = self.street.filter(|name| !name.is_empty())?;
        Some(ParkingZone { id, name })
    }
}

use parkstat_domain::ParkingZone;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ParkResponse {
    pub id: i64,
    pub name: String,
}

impl From<ParkingZone> for ParkResponse {
    fn from(zone: ParkingZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
        }
    }
}

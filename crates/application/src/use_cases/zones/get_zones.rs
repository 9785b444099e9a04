use crate::ports::ParkingZoneRepository;
use parkstat_domain::{DomainError, ParkingZone};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GetParkingZonesUseCase {
    repository: Arc<dyn ParkingZoneRepository>,
}

impl GetParkingZonesUseCase {
    pub fn new(repository: Arc<dyn ParkingZoneRepository>) -> Self {
        Self { repository }
    }

    /// Returns the zone lookup list without incomplete rows.
    ///
    /// An empty table is `NotFound`; a table whose rows are all incomplete
    /// yields an empty list.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<ParkingZone>, DomainError> {
        let records = self.repository.get_all().await?;
        if records.is_empty() {
            return Err(DomainError::NotFound(
                "No parking zone data found".to_string(),
            ));
        }

        let total = records.len();
        let zones: Vec<ParkingZone> = records
            .into_iter()
            .filter_map(|record| record.into_zone())
            .collect();

        debug!(total, kept = zones.len(), "Parking zones filtered");
        Ok(zones)
    }
}

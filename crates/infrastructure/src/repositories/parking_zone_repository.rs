use async_trait::async_trait;
use parkstat_application::ports::ParkingZoneRepository;
use parkstat_domain::{DomainError, ParkingZoneRecord};
use sqlx::AnyPool;
use tracing::{error, instrument};

type ZoneRow = (Option<i64>, Option<String>);

pub struct SqlParkingZoneRepository {
    pool: AnyPool,
}

impl SqlParkingZoneRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingZoneRepository for SqlParkingZoneRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<ParkingZoneRecord>, DomainError> {
        let rows = sqlx::query_as::<_, ZoneRow>(
            "SELECT ParkingZone, OnStreet FROM parking_zones_linked_to_street_segments",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query parking zones");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|(zone, street)| ParkingZoneRecord::new(zone, street))
            .collect())
    }
}

use async_trait::async_trait;
use parkstat_domain::{DomainError, ParkingZoneRecord};

#[async_trait]
pub trait ParkingZoneRepository: Send + Sync {
    /// Returns the raw zone/street rows, including rows with null columns.
    async fn get_all(&self) -> Result<Vec<ParkingZoneRecord>, DomainError>;
}

use async_trait::async_trait;
use parkstat_domain::{DomainError, VehicleRegistration};

#[async_trait]
pub trait VehicleRegistrationRepository: Send + Sync {
    /// Returns every registration row, in storage order.
    async fn get_all(&self) -> Result<Vec<VehicleRegistration>, DomainError>;
}

use crate::ports::VehicleRegistrationRepository;
use parkstat_domain::{DomainError, VehicleRegistration};
use std::sync::Arc;
use tracing::instrument;

pub struct GetVehicleRegistrationsUseCase {
    repository: Arc<dyn VehicleRegistrationRepository>,
}

impl GetVehicleRegistrationsUseCase {
    pub fn new(repository: Arc<dyn VehicleRegistrationRepository>) -> Self {
        Self { repository }
    }

    /// Returns all registration rows.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - If the table holds no rows
    /// * `DomainError::DatabaseError` - If the query fails
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<VehicleRegistration>, DomainError> {
        let rows = self.repository.get_all().await?;
        if rows.is_empty() {
            return Err(DomainError::NotFound("No vehicle data found".to_string()));
        }
        Ok(rows)
    }
}

use async_trait::async_trait;
use parkstat_application::ports::VehicleRegistrationRepository;
use parkstat_domain::{DomainError, VehicleRegistration};
use sqlx::AnyPool;
use tracing::{error, instrument};

type RegistrationRow = (String, i64, i64);

pub struct SqlVehicleRegistrationRepository {
    pool: AnyPool,
}

impl SqlVehicleRegistrationRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    fn row_to_registration(row: RegistrationRow) -> VehicleRegistration {
        let (state, year, value) = row;
        VehicleRegistration { state, year, value }
    }
}

#[async_trait]
impl VehicleRegistrationRepository for SqlVehicleRegistrationRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<VehicleRegistration>, DomainError> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            "SELECT State, Year, Value FROM Australian_Bureau_of_Statistics_cleaned",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query vehicle registrations");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_registration).collect())
    }
}

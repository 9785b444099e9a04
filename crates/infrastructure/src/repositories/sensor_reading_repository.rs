use async_trait::async_trait;
use parkstat_application::ports::SensorReadingRepository;
use parkstat_domain::{DomainError, SensorStatus, ZoneId};
use sqlx::AnyPool;
use tracing::{error, instrument};

const COUNT_READINGS: &str = "SELECT COUNT(*)
     FROM on_street_parking_bay_sensors
     WHERE Zone_Number = ?
       AND Status_Timestamp BETWEEN ? AND ?
       AND Status_Description IN";

pub struct SqlSensorReadingRepository {
    pool: AnyPool,
}

impl SqlSensorReadingRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    fn count_sql(status_count: usize) -> String {
        let placeholders = vec!["?"; status_count].join(", ");
        format!("{} ({})", COUNT_READINGS, placeholders)
    }
}

#[async_trait]
impl SensorReadingRepository for SqlSensorReadingRepository {
    #[instrument(skip(self))]
    async fn count_readings(
        &self,
        zone: ZoneId,
        from_secs: i64,
        to_secs: i64,
        statuses: &[SensorStatus],
    ) -> Result<u64, DomainError> {
        if statuses.is_empty() {
            return Ok(0);
        }

        let sql = Self::count_sql(statuses.len());
        let mut query = sqlx::query_as::<_, (i64,)>(&sql)
            .bind(zone.0)
            .bind(from_secs)
            .bind(to_secs);
        for status in statuses {
            query = query.bind(status.as_str());
        }

        let row = query.fetch_optional(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to count sensor readings");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map_or(0, |(count,)| count.max(0) as u64))
    }
}

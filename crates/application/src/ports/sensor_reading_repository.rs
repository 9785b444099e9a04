use async_trait::async_trait;
use parkstat_domain::{DomainError, SensorStatus, ZoneId};

/// Read access to the on-street bay sensor readings.
#[async_trait]
pub trait SensorReadingRepository: Send + Sync {
    /// Counts the readings of a zone whose status is one of `statuses`.
    ///
    /// # Arguments
    ///
    /// * `zone` - Parking zone the readings belong to
    /// * `from_secs` - Lower bound, epoch seconds, inclusive
    /// * `to_secs` - Upper bound, epoch seconds, inclusive
    /// * `statuses` - Status values to count; never empty
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - Number of matching readings, `0` when nothing matches
    /// * `Err(DomainError)` - If the query fails
    async fn count_readings(
        &self,
        zone: ZoneId,
        from_secs: i64,
        to_secs: i64,
        statuses: &[SensorStatus],
    ) -> Result<u64, DomainError>;
}

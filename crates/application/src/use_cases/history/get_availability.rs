use crate::ports::SensorReadingRepository;
use chrono_tz::Tz;
use futures::stream::{self, StreamExt, TryStreamExt};
use parkstat_domain::{
    AvailabilitySample, DomainError, HourSlot, SensorStatus, SensorStatusCount, TimeRange, ZoneId,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case computing the hourly availability series of a parking zone.
///
/// The range is split into one-hour slots starting at the top of the hour
/// that contains `range.start`. For every slot the recognized readings are
/// counted and, only when there are any, the unoccupied ones as well.
pub struct GetAvailabilityHistoryUseCase {
    repository: Arc<dyn SensorReadingRepository>,
    timezone: Tz,
    query_concurrency: usize,
    max_slots: Option<u64>,
}

impl GetAvailabilityHistoryUseCase {
    pub fn new(repository: Arc<dyn SensorReadingRepository>, timezone: Tz) -> Self {
        Self {
            repository,
            timezone,
            query_concurrency: 1,
            max_slots: None,
        }
    }

    /// Number of slots whose queries may be in flight at once. Results keep
    /// chronological order regardless.
    pub fn with_query_concurrency(mut self, concurrency: usize) -> Self {
        self.query_concurrency = concurrency.max(1);
        self
    }

    /// Rejects ranges spanning more than `max_slots` hourly slots.
    pub fn with_max_slots(mut self, max_slots: Option<u64>) -> Self {
        self.max_slots = max_slots;
        self
    }

    #[instrument(skip(self, zone), fields(zone = %zone))]
    pub async fn execute(
        &self,
        zone: ZoneId,
        range: TimeRange,
    ) -> Result<Vec<AvailabilitySample>, DomainError> {
        let slots = range.hour_count();
        if let Some(max) = self.max_slots {
            if slots > max {
                return Err(DomainError::RangeTooLarge { slots, max });
            }
        }

        debug!(
            slots,
            start = %range.start(),
            end = %range.end(),
            "Computing availability history"
        );

        stream::iter(range.hour_slots(self.timezone)?)
            .map(move |slot| async move { self.sample_slot(zone, slot?).await })
            .buffered(self.query_concurrency)
            .try_collect()
            .await
    }

    async fn sample_slot(
        &self,
        zone: ZoneId,
        slot: HourSlot,
    ) -> Result<AvailabilitySample, DomainError> {
        let counts = self.count_slot(zone, &slot).await?;
        Ok(AvailabilitySample::from_slot(slot, counts))
    }

    async fn count_slot(
        &self,
        zone: ZoneId,
        slot: &HourSlot,
    ) -> Result<SensorStatusCount, DomainError> {
        let (from, to) = (slot.start_secs(), slot.end_secs());

        let total = self
            .repository
            .count_readings(zone, from, to, &SensorStatus::RECOGNIZED)
            .await?;

        if total == 0 {
            return Ok(SensorStatusCount::default());
        }

        let unoccupied = self
            .repository
            .count_readings(zone, from, to, &[SensorStatus::Unoccupied])
            .await?;

        Ok(SensorStatusCount::new(total, unoccupied))
    }
}

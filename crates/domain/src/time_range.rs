use crate::DomainError;
use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;

pub const SECONDS_PER_HOUR: i64 = 3_600;
const MILLIS_PER_HOUR: i64 = SECONDS_PER_HOUR * 1_000;

/// Half-open request window `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidTimeRange(
                "Start timestamp must be less than end timestamp".to_string(),
            ));
        }

        // Slots reach back to the top of the first hour and up to one hour past `end`
        let one_hour = Duration::hours(1);
        let has_headroom = start.checked_sub_signed(one_hour).is_some()
            && end.checked_add_signed(one_hour).is_some();
        if !has_headroom {
            return Err(DomainError::InvalidTimeRange(
                "Timestamps are too close to the representable date limits".to_string(),
            ));
        }

        Ok(Self { start, end })
    }

    /// Builds a range from epoch milliseconds, the unit used by the web frontend.
    pub fn from_millis(start_ms: i64, end_ms: i64) -> Result<Self, DomainError> {
        if start_ms >= end_ms {
            return Err(DomainError::InvalidTimeRange(
                "Start timestamp must be less than end timestamp".to_string(),
            ));
        }

        let start = DateTime::from_timestamp_millis(start_ms).ok_or_else(|| {
            DomainError::InvalidTimeRange(format!("Start timestamp {} is out of range", start_ms))
        })?;
        let end = DateTime::from_timestamp_millis(end_ms).ok_or_else(|| {
            DomainError::InvalidTimeRange(format!("End timestamp {} is out of range", end_ms))
        })?;

        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Number of hourly slots covering the range.
    ///
    /// Always one more than the number of whole hours between `start` and `end`,
    /// so a range ending mid-hour still gets a trailing slot.
    pub fn hour_count(&self) -> u64 {
        let elapsed_ms = (self.end - self.start).num_milliseconds();
        (elapsed_ms / MILLIS_PER_HOUR) as u64 + 1
    }

    /// Builds the hourly slots in chronological order.
    ///
    /// The first slot starts at `start` truncated to the top of its hour on the
    /// wall clock of `tz`; each following slot starts exactly one hour later.
    pub fn hour_slots(
        &self,
        tz: Tz,
    ) -> Result<impl Iterator<Item = Result<HourSlot, DomainError>>, DomainError> {
        let first = truncate_to_hour(self.start, &tz).ok_or_else(out_of_range)?;

        Ok((0..self.hour_count()).map(move |i| {
            let start = first
                .checked_add_signed(Duration::hours(i as i64))
                .ok_or_else(out_of_range)?;
            HourSlot::starting_at(start, &tz)
        }))
    }
}

fn out_of_range() -> DomainError {
    DomainError::InvalidTimeRange("Hourly slot falls outside the representable dates".to_string())
}

/// Drops minutes, seconds and sub-seconds of the local wall-clock time in `tz`.
///
/// `None` when the result is not representable.
pub fn truncate_to_hour(instant: DateTime<Utc>, tz: &Tz) -> Option<DateTime<Utc>> {
    let local = instant.with_timezone(tz);
    let into_hour = Duration::minutes(local.minute() as i64)
        + Duration::seconds(local.second() as i64)
        + Duration::nanoseconds(local.nanosecond() as i64);
    instant.checked_sub_signed(into_hour)
}

/// One-hour bucket of a [`TimeRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: String,
}

impl HourSlot {
    pub fn starting_at(start: DateTime<Utc>, tz: &Tz) -> Result<Self, DomainError> {
        let end = start
            .checked_add_signed(Duration::hours(1))
            .ok_or_else(out_of_range)?;
        let hour = start.with_timezone(tz).hour();
        Ok(Self {
            start,
            end,
            label: format!("{}:00", hour),
        })
    }

    pub fn start_secs(&self) -> i64 {
        self.start.timestamp()
    }

    pub fn end_secs(&self) -> i64 {
        self.end.timestamp()
    }
}

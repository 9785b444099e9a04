#![allow(dead_code)]

use async_trait::async_trait;
use parkstat_application::ports::{
    DatabaseProbe, ParkingZoneRepository, SensorReadingRepository, VehicleRegistrationRepository,
};
use parkstat_domain::{
    DomainError, ParkingZoneRecord, SensorStatus, VehicleRegistration, ZoneId,
};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock SensorReadingRepository
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountCall {
    pub zone: ZoneId,
    pub from_secs: i64,
    pub to_secs: i64,
    pub statuses: Vec<SensorStatus>,
}

#[derive(Clone)]
pub struct MockSensorReadingRepository {
    readings: Arc<RwLock<Vec<(ZoneId, i64, SensorStatus)>>>,
    calls: Arc<RwLock<Vec<CountCall>>>,
    fail_after: Arc<RwLock<Option<usize>>>,
}

impl MockSensorReadingRepository {
    pub fn new() -> Self {
        Self {
            readings: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            fail_after: Arc::new(RwLock::new(None)),
        }
    }

    /// Adds one reading at `timestamp` (epoch seconds).
    pub async fn add_reading(&self, zone: i64, timestamp: i64, status: SensorStatus) {
        self.readings
            .write()
            .await
            .push((ZoneId(zone), timestamp, status));
    }

    /// Adds `count` identical readings.
    pub async fn add_readings(&self, zone: i64, timestamp: i64, status: SensorStatus, count: usize) {
        for _ in 0..count {
            self.add_reading(zone, timestamp, status).await;
        }
    }

    /// Makes every call after the first `calls` ones fail.
    pub async fn fail_after(&self, calls: usize) {
        *self.fail_after.write().await = Some(calls);
    }

    pub async fn calls(&self) -> Vec<CountCall> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

impl Default for MockSensorReadingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensorReadingRepository for MockSensorReadingRepository {
    async fn count_readings(
        &self,
        zone: ZoneId,
        from_secs: i64,
        to_secs: i64,
        statuses: &[SensorStatus],
    ) -> Result<u64, DomainError> {
        let mut calls = self.calls.write().await;
        if let Some(limit) = *self.fail_after.read().await {
            if calls.len() >= limit {
                return Err(DomainError::DatabaseError(
                    "Mock repository failed".to_string(),
                ));
            }
        }
        calls.push(CountCall {
            zone,
            from_secs,
            to_secs,
            statuses: statuses.to_vec(),
        });
        drop(calls);

        let readings = self.readings.read().await;
        let count = readings
            .iter()
            .filter(|(z, ts, status)| {
                *z == zone && *ts >= from_secs && *ts <= to_secs && statuses.contains(status)
            })
            .count();

        Ok(count as u64)
    }
}

// ============================================================================
// Mock VehicleRegistrationRepository
// ============================================================================

#[derive(Clone)]
pub struct MockVehicleRegistrationRepository {
    rows: Arc<RwLock<Vec<VehicleRegistration>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockVehicleRegistrationRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_rows(rows: Vec<(&str, i64, i64)>) -> Self {
        let rows = rows
            .into_iter()
            .map(|(state, year, value)| VehicleRegistration {
                state: state.to_string(),
                year,
                value,
            })
            .collect();

        Self {
            rows: Arc::new(RwLock::new(rows)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

impl Default for MockVehicleRegistrationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleRegistrationRepository for MockVehicleRegistrationRepository {
    async fn get_all(&self) -> Result<Vec<VehicleRegistration>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }
        Ok(self.rows.read().await.clone())
    }
}

// ============================================================================
// Mock ParkingZoneRepository
// ============================================================================

#[derive(Clone)]
pub struct MockParkingZoneRepository {
    records: Arc<RwLock<Vec<ParkingZoneRecord>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockParkingZoneRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_records(records: Vec<(Option<i64>, Option<&str>)>) -> Self {
        let records = records
            .into_iter()
            .map(|(zone, street)| ParkingZoneRecord::new(zone, street.map(str::to_string)))
            .collect();

        Self {
            records: Arc::new(RwLock::new(records)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

impl Default for MockParkingZoneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParkingZoneRepository for MockParkingZoneRepository {
    async fn get_all(&self) -> Result<Vec<ParkingZoneRecord>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }
        Ok(self.records.read().await.clone())
    }
}

// ============================================================================
// Mock DatabaseProbe
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDatabaseProbe {
    should_fail: Arc<RwLock<bool>>,
}

impl MockDatabaseProbe {
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

#[async_trait]
impl DatabaseProbe for MockDatabaseProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("Mock probe failed".to_string()));
        }
        Ok(())
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use parkstat_api::{create_app, AppState};
use parkstat_application::ports::{
    DatabaseProbe, ParkingZoneRepository, SensorReadingRepository, VehicleRegistrationRepository,
};
use parkstat_application::use_cases::{
    CheckDatabaseHealthUseCase, GetAvailabilityHistoryUseCase, GetParkingZonesUseCase,
    GetVehicleRegistrationsUseCase,
};
use parkstat_domain::config::ServerConfig;
use parkstat_domain::{DomainError, ParkingZoneRecord, SensorStatus, VehicleRegistration, ZoneId};
use std::sync::Arc;
use tokio::sync::RwLock;

/// 2024-01-01T08:00:00Z
pub const HOUR_8: i64 = 1_704_096_000;

#[derive(Clone, Default)]
pub struct MockSensorReadings {
    readings: Arc<RwLock<Vec<(i64, i64, SensorStatus)>>>,
    calls: Arc<RwLock<usize>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockSensorReadings {
    pub async fn add(&self, zone: i64, timestamp: i64, status: SensorStatus) {
        self.readings.write().await.push((zone, timestamp, status));
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn call_count(&self) -> usize {
        *self.calls.read().await
    }
}

#[async_trait]
impl SensorReadingRepository for MockSensorReadings {
    async fn count_readings(
        &self,
        zone: ZoneId,
        from_secs: i64,
        to_secs: i64,
        statuses: &[SensorStatus],
    ) -> Result<u64, DomainError> {
        *self.calls.write().await += 1;
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "connection refused: mysql://root:secret@db".to_string(),
            ));
        }

        let count = self
            .readings
            .read()
            .await
            .iter()
            .filter(|(z, ts, status)| {
                *z == zone.0 && *ts >= from_secs && *ts <= to_secs && statuses.contains(status)
            })
            .count();
        Ok(count as u64)
    }
}

#[derive(Clone, Default)]
pub struct MockVehicles {
    rows: Arc<RwLock<Vec<VehicleRegistration>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockVehicles {
    pub async fn add(&self, state: &str, year: i64, value: i64) {
        self.rows.write().await.push(VehicleRegistration {
            state: state.to_string(),
            year,
            value,
        });
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

#[async_trait]
impl VehicleRegistrationRepository for MockVehicles {
    async fn get_all(&self) -> Result<Vec<VehicleRegistration>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("table missing".to_string()));
        }
        Ok(self.rows.read().await.clone())
    }
}

#[derive(Clone, Default)]
pub struct MockZones {
    records: Arc<RwLock<Vec<ParkingZoneRecord>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockZones {
    pub async fn add(&self, zone: Option<i64>, street: Option<&str>) {
        self.records
            .write()
            .await
            .push(ParkingZoneRecord::new(zone, street.map(str::to_string)));
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

#[async_trait]
impl ParkingZoneRepository for MockZones {
    async fn get_all(&self) -> Result<Vec<ParkingZoneRecord>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("table missing".to_string()));
        }
        Ok(self.records.read().await.clone())
    }
}

#[derive(Clone, Default)]
pub struct MockProbe {
    down: Arc<RwLock<bool>>,
}

impl MockProbe {
    pub async fn set_down(&self, down: bool) {
        *self.down.write().await = down;
    }
}

#[async_trait]
impl DatabaseProbe for MockProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        if *self.down.read().await {
            return Err(DomainError::DatabaseError("ping failed".to_string()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub readings: MockSensorReadings,
    pub vehicles: MockVehicles,
    pub zones: MockZones,
    pub probe: MockProbe,
    pub max_slots: Option<u64>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            readings: MockSensorReadings::default(),
            vehicles: MockVehicles::default(),
            zones: MockZones::default(),
            probe: MockProbe::default(),
            max_slots: None,
        }
    }

    pub fn with_max_slots(mut self, max_slots: u64) -> Self {
        self.max_slots = Some(max_slots);
        self
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            get_history: Arc::new(
                GetAvailabilityHistoryUseCase::new(
                    Arc::new(self.readings.clone()),
                    chrono_tz::UTC,
                )
                .with_max_slots(self.max_slots),
            ),
            get_vehicles: Arc::new(GetVehicleRegistrationsUseCase::new(Arc::new(
                self.vehicles.clone(),
            ))),
            get_zones: Arc::new(GetParkingZonesUseCase::new(Arc::new(self.zones.clone()))),
            check_health: Arc::new(CheckDatabaseHealthUseCase::new(Arc::new(
                self.probe.clone(),
            ))),
        };

        create_app(state, &ServerConfig::default())
    }
}

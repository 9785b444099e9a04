use super::Repositories;
use parkstat_api::AppState;
use parkstat_application::use_cases::{
    CheckDatabaseHealthUseCase, GetAvailabilityHistoryUseCase, GetParkingZonesUseCase,
    GetVehicleRegistrationsUseCase,
};
use parkstat_domain::config::HistoryConfig;
use std::sync::Arc;

pub struct UseCases {
    pub get_history: Arc<GetAvailabilityHistoryUseCase>,
    pub get_vehicles: Arc<GetVehicleRegistrationsUseCase>,
    pub get_zones: Arc<GetParkingZonesUseCase>,
    pub check_health: Arc<CheckDatabaseHealthUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, history: &HistoryConfig) -> anyhow::Result<Self> {
        let get_history = GetAvailabilityHistoryUseCase::new(
            repos.sensor_readings.clone(),
            history.tz()?,
        )
        .with_query_concurrency(history.query_concurrency)
        .with_max_slots(history.max_slots);

        Ok(Self {
            get_history: Arc::new(get_history),
            get_vehicles: Arc::new(GetVehicleRegistrationsUseCase::new(
                repos.vehicle_registrations.clone(),
            )),
            get_zones: Arc::new(GetParkingZonesUseCase::new(repos.parking_zones.clone())),
            check_health: Arc::new(CheckDatabaseHealthUseCase::new(repos.probe.clone())),
        })
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            get_history: self.get_history,
            get_vehicles: self.get_vehicles,
            get_zones: self.get_zones,
            check_health: self.check_health,
        }
    }
}

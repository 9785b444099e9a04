use parkstat_application::use_cases::{
    CheckDatabaseHealthUseCase, GetAvailabilityHistoryUseCase, GetParkingZonesUseCase,
    GetVehicleRegistrationsUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_history: Arc<GetAvailabilityHistoryUseCase>,
    pub get_vehicles: Arc<GetVehicleRegistrationsUseCase>,
    pub get_zones: Arc<GetParkingZonesUseCase>,
    pub check_health: Arc<CheckDatabaseHealthUseCase>,
}

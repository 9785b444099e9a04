use parkstat_infrastructure::database::SqlDatabaseProbe;
use parkstat_infrastructure::repositories::{
    SqlParkingZoneRepository, SqlSensorReadingRepository, SqlVehicleRegistrationRepository,
};
use sqlx::AnyPool;
use std::sync::Arc;

pub struct Repositories {
    pub sensor_readings: Arc<SqlSensorReadingRepository>,
    pub vehicle_registrations: Arc<SqlVehicleRegistrationRepository>,
    pub parking_zones: Arc<SqlParkingZoneRepository>,
    pub probe: Arc<SqlDatabaseProbe>,
}

impl Repositories {
    pub fn new(pool: AnyPool) -> Self {
        Self {
            sensor_readings: Arc::new(SqlSensorReadingRepository::new(pool.clone())),
            vehicle_registrations: Arc::new(SqlVehicleRegistrationRepository::new(pool.clone())),
            parking_zones: Arc::new(SqlParkingZoneRepository::new(pool.clone())),
            probe: Arc::new(SqlDatabaseProbe::new(pool)),
        }
    }
}

mod database_probe;
mod parking_zone_repository;
mod sensor_reading_repository;
mod vehicle_registration_repository;

pub use database_probe::DatabaseProbe;
pub use parking_zone_repository::ParkingZoneRepository;
pub use sensor_reading_repository::SensorReadingRepository;
pub use vehicle_registration_repository::VehicleRegistrationRepository;

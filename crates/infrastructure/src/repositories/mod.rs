pub mod parking_zone_repository;
pub mod sensor_reading_repository;
pub mod vehicle_registration_repository;

pub use parking_zone_repository::SqlParkingZoneRepository;
pub use sensor_reading_repository::SqlSensorReadingRepository;
pub use vehicle_registration_repository::SqlVehicleRegistrationRepository;

//! Parkstat Domain Layer
pub mod availability;
pub mod config;
pub mod errors;
pub mod sensor;
pub mod time_range;
pub mod vehicle;
pub mod zone;

pub use availability::AvailabilitySample;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use sensor::{SensorStatus, SensorStatusCount};
pub use time_range::{HourSlot, TimeRange};
pub use vehicle::VehicleRegistration;
pub use zone::{ParkingZone, ParkingZoneRecord, ZoneId};

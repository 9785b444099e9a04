pub mod error;
pub mod history;
pub mod vehicle;
pub mod zone;

pub use error::ErrorResponse;
pub use history::{AvailabilityResponse, HistoryQuery};
pub use vehicle::VehicleResponse;
pub use zone::ParkResponse;

pub mod health;
pub mod history;
pub mod vehicles;
pub mod zones;

// Re-export use cases
pub use health::CheckDatabaseHealthUseCase;
pub use history::GetAvailabilityHistoryUseCase;
pub use vehicles::GetVehicleRegistrationsUseCase;
pub use zones::GetParkingZonesUseCase;

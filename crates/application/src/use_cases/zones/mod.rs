mod get_zones;

pub use get_zones::GetParkingZonesUseCase;

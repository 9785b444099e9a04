mod get_registrations;

pub use get_registrations::GetVehicleRegistrationsUseCase;

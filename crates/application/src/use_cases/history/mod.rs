mod get_availability;

pub use get_availability::GetAvailabilityHistoryUseCase;

mod check;

pub use check::CheckDatabaseHealthUseCase;

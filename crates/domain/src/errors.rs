use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Time range too large: {slots} hourly slots requested, at most {max} allowed")]
    RangeTooLarge { slots: u64, max: u64 },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DomainError {
    /// True for errors caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidTimeRange(_) | DomainError::RangeTooLarge { .. }
        )
    }
}

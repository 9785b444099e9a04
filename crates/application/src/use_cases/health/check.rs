use crate::ports::DatabaseProbe;
use parkstat_domain::DomainError;
use std::sync::Arc;

pub struct CheckDatabaseHealthUseCase {
    probe: Arc<dyn DatabaseProbe>,
}

impl CheckDatabaseHealthUseCase {
    pub fn new(probe: Arc<dyn DatabaseProbe>) -> Self {
        Self { probe }
    }

    pub async fn execute(&self) -> Result<(), DomainError> {
        self.probe.ping().await
    }
}

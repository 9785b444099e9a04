use async_trait::async_trait;
use parkstat_domain::DomainError;

#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Runs a trivial query to confirm the database answers.
    async fn ping(&self) -> Result<(), DomainError>;
}

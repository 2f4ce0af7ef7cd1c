use crate::domain::model::{CobjProperties, CobjRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port to the upstream CRM. One implementation talks to HubSpot; tests can
/// substitute their own.
#[async_trait]
pub trait CrmClient: Send + Sync {
    /// Fetch up to `limit` records with the given property projection.
    async fn list_records(&self, limit: u32, properties: &str) -> Result<Vec<CobjRecord>>;

    /// Create one record. Attempted exactly once, no retries.
    async fn create_record(&self, properties: CobjProperties) -> Result<()>;
}

use crate::domain::model::{CobjProperties, CobjRecord, CreateCobjRequest, ListCobjResponse};
use crate::domain::ports::CrmClient;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// reqwest-backed client for the HubSpot CRM v3 custom-object resource.
/// Everything goes through the one endpoint `{base}/crm/v3/objects/{type}`.
#[derive(Debug, Clone)]
pub struct HubSpotClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl HubSpotClient {
    pub fn new(base_url: &str, object_type: &str, access_token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: build_endpoint(base_url, object_type),
            access_token,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

fn build_endpoint(base_url: &str, object_type: &str) -> String {
    format!(
        "{}/crm/v3/objects/{}",
        base_url.trim_end_matches('/'),
        object_type
    )
}

#[async_trait]
impl CrmClient for HubSpotClient {
    async fn list_records(&self, limit: u32, properties: &str) -> Result<Vec<CobjRecord>> {
        tracing::debug!("📡 GET {} (limit={})", self.endpoint, limit);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", self.bearer())
            .header("Content-Type", "application/json")
            .query(&[("limit", limit.to_string()), ("properties", properties.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ListCobjResponse = response.json().await?;
        tracing::debug!("📡 Upstream returned {} records", parsed.results.len());
        Ok(parsed.results)
    }

    async fn create_record(&self, properties: CobjProperties) -> Result<()> {
        tracing::debug!("📡 POST {} ({:?})", self.endpoint, properties);

        let payload = CreateCobjRequest { properties };
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", self.bearer())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatusError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

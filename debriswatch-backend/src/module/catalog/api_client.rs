//! HTTP client for the CelesTrak general-perturbations catalog.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::FetchError;
use super::types::RawCatalogRecord;

pub const DEFAULT_BASE_URL: &str = "https://celestrak.org/NORAD/elements/gp.php";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Anything that can produce a catalog snapshot for a group.
///
/// The production implementation talks HTTP; tests substitute their own.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, group: &str) -> Result<Vec<RawCatalogRecord>, FetchError>;
}

/// CelesTrak client. One GET per fetch, fixed timeout, no retries.
pub struct CelestrakClient {
    client: reqwest::Client,
    base_url: String,
}

impl CelestrakClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for CelestrakClient {
    async fn fetch(&self, group: &str) -> Result<Vec<RawCatalogRecord>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("GROUP", group), ("FORMAT", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let records: Vec<RawCatalogRecord> =
            response.json().await.map_err(FetchError::Decode)?;

        debug!("Fetched {} records for group '{}'", records.len(), group);
        Ok(records)
    }
}

//! HTTP client for the items API.

use anyhow::Result;
use serde_json::Value;

/// Client for the items API, owning a shared connection pool and the
/// configured base URL.
pub struct ItemsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ItemsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full item list from `{base_url}/items`.
    ///
    /// Items are opaque JSON values; the response array is returned in the
    /// order the API produced it.
    pub async fn list_items(&self) -> Result<Vec<Value>> {
        let url = format!("{}/items", self.base_url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Items request failed");
            anyhow::anyhow!("Items request failed: {}", e)
        })?;

        let response = response.error_for_status().map_err(|e| {
            tracing::error!(url = %url, error = %e, "Items API returned an error status");
            anyhow::anyhow!("Items API returned an error status: {}", e)
        })?;

        let items = response.json::<Vec<Value>>().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to parse items response");
            anyhow::anyhow!("Failed to parse items response: {}", e)
        })?;

        Ok(items)
    }
}

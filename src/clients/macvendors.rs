use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;

/// macvendors.com MAC vendor lookup. Authenticates with a Bearer token and,
/// unlike the other vendors, may answer with a bare text body (the vendor
/// name) instead of JSON.
#[derive(Clone)]
pub struct MacVendorsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl MacVendorsClient {
    #[must_use]
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn lookup(&self, mac: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(mac));
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "MacVendors API error: {} - {}",
                status,
                body
            ));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}

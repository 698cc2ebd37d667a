use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;

/// ipgeolocation.io IP geolocation. Note the camelCase `apiKey` parameter,
/// unlike the other vendors.
#[derive(Clone)]
pub struct IpGeolocationClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl IpGeolocationClient {
    #[must_use]
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn locate(&self, ip: &str) -> Result<Value> {
        let url = format!("{}/ipgeo", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str()), ("ip", ip)])
            .send()
            .await?;

        super::read_json_payload("IPGeolocation", response).await
    }
}

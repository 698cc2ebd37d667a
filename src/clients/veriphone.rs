use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;

/// Veriphone phone verification (`veriphone.io`).
#[derive(Clone)]
pub struct VeriphoneClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl VeriphoneClient {
    #[must_use]
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn verify(&self, number: &str) -> Result<Value> {
        let url = format!("{}/verify", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("phone", number)])
            .send()
            .await?;

        super::read_json_payload("Veriphone", response).await
    }
}

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;

/// Hunter.io email verifier.
#[derive(Clone)]
pub struct HunterClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HunterClient {
    #[must_use]
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn verify_email(&self, email: &str) -> Result<Value> {
        let url = format!("{}/email-verifier", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("email", email), ("api_key", self.api_key.as_str())])
            .send()
            .await?;

        super::read_json_payload("Hunter", response).await
    }
}

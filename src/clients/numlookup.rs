use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;

/// NumLookup phone validation (`numlookupapi.com`). The key travels as an
/// `apikey` query parameter.
#[derive(Clone)]
pub struct NumLookupClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NumLookupClient {
    #[must_use]
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn validate(&self, number: &str) -> Result<Value> {
        let url = format!(
            "{}/validate/{}",
            self.base_url,
            urlencoding::encode(number)
        );
        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        super::read_json_payload("NumLookup", response).await
    }
}

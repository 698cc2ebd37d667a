use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;

/// Abstract API validation endpoints. Phone and email validation live on
/// separate hosts but share the request shape: the key is an `api_key` query
/// parameter and the looked-up value travels as one named parameter.
#[derive(Clone)]
pub struct AbstractClient {
    http: Client,
    base_url: String,
    api_key: String,
    value_param: &'static str,
}

impl AbstractClient {
    #[must_use]
    pub fn phone_validation(http: Client, config: &ProviderConfig) -> Self {
        Self::with_param(http, config, "phone")
    }

    #[must_use]
    pub fn email_validation(http: Client, config: &ProviderConfig) -> Self {
        Self::with_param(http, config, "email")
    }

    fn with_param(http: Client, config: &ProviderConfig, value_param: &'static str) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            value_param,
        }
    }

    pub async fn validate(&self, value: &str) -> Result<Value> {
        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), (self.value_param, value)])
            .send()
            .await?;

        super::read_json_payload("Abstract", response).await
    }
}

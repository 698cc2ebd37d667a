use futures::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::clients::abstract_api::AbstractClient;
use crate::clients::hunter::HunterClient;
use crate::clients::ipgeolocation::IpGeolocationClient;
use crate::clients::macvendors::MacVendorsClient;
use crate::clients::numlookup::NumLookupClient;
use crate::clients::veriphone::VeriphoneClient;
use crate::config::Config;
use crate::models::lookup::{LookupKind, LookupReport, ProviderOutcome};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("query must not be empty")]
    EmptyQuery,
}

/// Fans one query out to every configured provider for its kind and collects
/// the outcomes. Providers are fixed at construction from the config; one
/// that is disabled or keyless is never attempted.
pub struct LookupService {
    numlookup: Option<NumLookupClient>,
    abstract_phone: Option<AbstractClient>,
    abstract_email: Option<AbstractClient>,
    veriphone: Option<VeriphoneClient>,
    hunter: Option<HunterClient>,
    ipgeolocation: Option<IpGeolocationClient>,
    macvendors: Option<MacVendorsClient>,
}

type ProviderCall<'a> = BoxFuture<'a, (&'static str, anyhow::Result<Value>)>;

impl LookupService {
    #[must_use]
    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        let p = &config.providers;

        Self {
            numlookup: p
                .numlookup
                .is_configured()
                .then(|| NumLookupClient::new(http.clone(), &p.numlookup)),
            abstract_phone: p
                .abstract_phone
                .is_configured()
                .then(|| AbstractClient::phone_validation(http.clone(), &p.abstract_phone)),
            abstract_email: p
                .abstract_email
                .is_configured()
                .then(|| AbstractClient::email_validation(http.clone(), &p.abstract_email)),
            veriphone: p
                .veriphone
                .is_configured()
                .then(|| VeriphoneClient::new(http.clone(), &p.veriphone)),
            hunter: p
                .hunter
                .is_configured()
                .then(|| HunterClient::new(http.clone(), &p.hunter)),
            ipgeolocation: p
                .ipgeolocation
                .is_configured()
                .then(|| IpGeolocationClient::new(http.clone(), &p.ipgeolocation)),
            macvendors: p
                .macvendors
                .is_configured()
                .then(|| MacVendorsClient::new(http, &p.macvendors)),
        }
    }

    /// Runs every configured provider for `kind` concurrently. Failures are
    /// captured per provider and never abort the aggregation; no retries.
    pub async fn aggregate(
        &self,
        kind: LookupKind,
        query: &str,
    ) -> Result<LookupReport, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let calls = self.calls_for(kind, query);
        debug!("Aggregating {} lookup across {} providers", kind, calls.len());

        let results = futures::future::join_all(calls).await;

        let outcomes = results
            .into_iter()
            .map(|(name, result)| match result {
                Ok(payload) => (name, ProviderOutcome::Success(payload)),
                Err(e) => {
                    warn!("Provider '{}' failed for {} lookup: {}", name, kind, e);
                    (name, ProviderOutcome::Failed(e.to_string()))
                }
            })
            .collect();

        Ok(LookupReport {
            kind,
            query: query.to_string(),
            outcomes,
        })
    }

    fn calls_for<'a>(&'a self, kind: LookupKind, query: &'a str) -> Vec<ProviderCall<'a>> {
        let mut calls: Vec<ProviderCall<'a>> = Vec::new();

        match kind {
            LookupKind::Phone => {
                if let Some(client) = &self.numlookup {
                    calls.push(Box::pin(async move {
                        ("numlookup", client.validate(query).await)
                    }));
                }
                if let Some(client) = &self.abstract_phone {
                    calls.push(Box::pin(async move {
                        ("abstract", client.validate(query).await)
                    }));
                }
                if let Some(client) = &self.veriphone {
                    calls.push(Box::pin(async move {
                        ("veriphone", client.verify(query).await)
                    }));
                }
            }
            LookupKind::Email => {
                if let Some(client) = &self.hunter {
                    calls.push(Box::pin(async move {
                        ("hunter", client.verify_email(query).await)
                    }));
                }
                if let Some(client) = &self.abstract_email {
                    calls.push(Box::pin(async move {
                        ("abstract", client.validate(query).await)
                    }));
                }
            }
            LookupKind::Ip => {
                if let Some(client) = &self.ipgeolocation {
                    calls.push(Box::pin(async move { ("geo", client.locate(query).await) }));
                }
            }
            LookupKind::Mac => {
                if let Some(client) = &self.macvendors {
                    calls.push(Box::pin(async move {
                        ("vendor", client.lookup(query).await)
                    }));
                }
            }
            // Social recon never leaves the process; see services::social.
            LookupKind::Social => {}
        }

        calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn bare_config() -> Config {
        // Default config has no API keys, so no provider is configured.
        Config::default()
    }

    fn service(config: &Config) -> LookupService {
        LookupService::from_config(config, reqwest::Client::new())
    }

    #[tokio::test]
    async fn empty_query_is_rejected_before_any_call() {
        let svc = service(&bare_config());
        for kind in [
            LookupKind::Phone,
            LookupKind::Email,
            LookupKind::Ip,
            LookupKind::Mac,
        ] {
            let err = svc.aggregate(kind, "   ").await.unwrap_err();
            assert_eq!(err, LookupError::EmptyQuery);
        }
    }

    #[tokio::test]
    async fn unconfigured_providers_are_never_attempted() {
        let svc = service(&bare_config());
        let report = svc.aggregate(LookupKind::Phone, "+15551234567").await.unwrap();
        assert!(report.outcomes.is_empty());
        assert!(report.merged().is_empty());
    }

    #[tokio::test]
    async fn provider_failures_are_isolated_and_explicit() {
        // Two providers pointed at a closed local port: both must be
        // attempted, both must fail independently, and the merged object
        // must stay empty rather than the aggregation erroring out.
        let mut config = bare_config();
        config.providers.numlookup.base_url = "http://127.0.0.1:1".to_string();
        config.providers.numlookup.api_key = "test".to_string();
        config.providers.veriphone.base_url = "http://127.0.0.1:1".to_string();
        config.providers.veriphone.api_key = "test".to_string();

        let svc = service(&config);
        let report = svc.aggregate(LookupKind::Phone, "+15551234567").await.unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.failures().len(), 2);
        assert!(report.merged().is_empty());

        let names: Vec<&str> = report.outcomes.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["numlookup", "veriphone"]);
    }

    #[tokio::test]
    async fn social_kind_has_no_providers() {
        let svc = service(&bare_config());
        let report = svc.aggregate(LookupKind::Social, "alice").await.unwrap();
        assert!(report.outcomes.is_empty());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The kind of identifier being looked up. Stored as the `type` column of the
/// query log, so the string forms are part of the persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Phone,
    Email,
    Ip,
    Mac,
    Social,
}

impl LookupKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Ip => "ip",
            Self::Mac => "mac",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened for one attempted provider. A provider that was never
/// attempted (disabled, or no credential) does not appear at all, so absence
/// and failure stay distinguishable to callers.
#[derive(Debug, Clone)]
pub enum ProviderOutcome {
    Success(Value),
    Failed(String),
}

impl ProviderOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// The result of one aggregation run: every attempted provider with its
/// outcome, in the fixed per-kind provider order.
#[derive(Debug, Clone)]
pub struct LookupReport {
    pub kind: LookupKind,
    pub query: String,
    pub outcomes: Vec<(&'static str, ProviderOutcome)>,
}

impl LookupReport {
    /// The wire shape: one key per successful provider, raw vendor payload
    /// underneath. Failed providers are omitted here; they stay visible on
    /// the report itself.
    #[must_use]
    pub fn merged(&self) -> serde_json::Map<String, Value> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                ProviderOutcome::Success(payload) => Some(((*name).to_string(), payload.clone())),
                ProviderOutcome::Failed(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<(&'static str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                ProviderOutcome::Failed(message) => Some((*name, message.as_str())),
                ProviderOutcome::Success(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report() -> LookupReport {
        LookupReport {
            kind: LookupKind::Phone,
            query: "+15551234567".to_string(),
            outcomes: vec![
                ("numlookup", ProviderOutcome::Success(json!({"valid": true}))),
                ("abstract", ProviderOutcome::Failed("HTTP 429".to_string())),
                ("veriphone", ProviderOutcome::Success(json!({"carrier": "T"}))),
            ],
        }
    }

    #[test]
    fn merged_keeps_only_successful_providers() {
        let merged = report().merged();
        assert_eq!(merged.len(), 2);
        assert!(merged.contains_key("numlookup"));
        assert!(merged.contains_key("veriphone"));
        assert!(!merged.contains_key("abstract"));
    }

    #[test]
    fn failures_are_reported_with_provider_name() {
        let report = report();
        let failures = report.failures();
        assert_eq!(failures, vec![("abstract", "HTTP 429")]);
    }

    #[test]
    fn kind_round_trips_through_serde() {
        let json = serde_json::to_string(&LookupKind::Mac).unwrap();
        assert_eq!(json, "\"mac\"");
        let kind: LookupKind = serde_json::from_str("\"social\"").unwrap();
        assert_eq!(kind, LookupKind::Social);
        assert_eq!(kind.as_str(), "social");
    }
}

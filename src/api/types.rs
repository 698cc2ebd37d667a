use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct PhoneLookupRequest {
    pub number: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailLookupRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct IpLookupRequest {
    pub ip: String,
}

#[derive(Debug, Deserialize)]
pub struct MacLookupRequest {
    pub mac: String,
}

#[derive(Debug, Deserialize)]
pub struct SocialLookupRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct DorkRequest {
    pub query: String,
    #[serde(rename = "type")]
    pub query_type: String,
}

#[derive(Debug, Serialize)]
pub struct DorkResponse {
    pub dorks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub query: String,
    pub results: serde_json::Value,
    pub timestamp: String,
}

impl From<crate::db::SearchEntry> for HistoryEntryDto {
    fn from(entry: crate::db::SearchEntry) -> Self {
        // Rows always hold JSON we serialized ourselves; if one is somehow
        // unreadable, surface it as a string rather than dropping the entry.
        let results = serde_json::from_str(&entry.results)
            .unwrap_or(serde_json::Value::String(entry.results));

        Self {
            id: entry.id,
            kind: entry.kind,
            query: entry.query,
            results,
            timestamp: entry.timestamp,
        }
    }
}

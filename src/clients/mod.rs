pub mod abstract_api;
pub mod hunter;
pub mod ipgeolocation;
pub mod macvendors;
pub mod numlookup;
pub mod veriphone;

use anyhow::Result;
use serde_json::Value;

/// Reads a vendor response body as raw JSON, failing on non-2xx with the
/// status and body text included.
pub(crate) async fn read_json_payload(
    service: &str,
    response: reqwest::Response,
) -> Result<Value> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow::anyhow!("{} API error: {} - {}", service, status, body));
    }

    Ok(response.json().await?)
}

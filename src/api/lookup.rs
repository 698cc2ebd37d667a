use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::{
    ApiError, AppState, EmailLookupRequest, IpLookupRequest, MacLookupRequest,
    PhoneLookupRequest, SocialLookupRequest,
};
use crate::models::lookup::LookupKind;
use crate::services::{SocialHit, social_candidates};

/// Aggregate, persist, respond. The wire response is the merged object
/// itself: one key per provider that answered, nothing else. Provider
/// failures were already logged by the aggregator and simply leave their
/// key out.
async fn run_lookup(
    state: &AppState,
    kind: LookupKind,
    query: &str,
) -> Result<Json<Value>, ApiError> {
    let report = state.shared.lookup.aggregate(kind, query).await?;

    let merged = Value::Object(report.merged());

    state
        .shared
        .store
        .record_search(kind, &report.query, &merged)
        .await
        .map_err(|e| ApiError::database(e.to_string()))?;

    info!(
        "{} lookup for '{}': {}/{} providers answered",
        kind,
        report.query,
        report.outcomes.iter().filter(|(_, o)| o.is_success()).count(),
        report.outcomes.len()
    );

    Ok(Json(merged))
}

pub async fn lookup_phone(
    State(state): State<Arc<AppState>>,
    request: Result<Json<PhoneLookupRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = request?;
    run_lookup(&state, LookupKind::Phone, &request.number).await
}

pub async fn lookup_email(
    State(state): State<Arc<AppState>>,
    request: Result<Json<EmailLookupRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = request?;
    run_lookup(&state, LookupKind::Email, &request.email).await
}

pub async fn lookup_ip(
    State(state): State<Arc<AppState>>,
    request: Result<Json<IpLookupRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = request?;
    run_lookup(&state, LookupKind::Ip, &request.ip).await
}

pub async fn lookup_mac(
    State(state): State<Arc<AppState>>,
    request: Result<Json<MacLookupRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = request?;
    run_lookup(&state, LookupKind::Mac, &request.mac).await
}

/// Social recon is a synthesized candidate list, not a provider fan-out,
/// but it is still a query: it gets a history entry like the rest.
pub async fn lookup_social(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SocialLookupRequest>, JsonRejection>,
) -> Result<Json<Vec<SocialHit>>, ApiError> {
    let Json(request) = request?;
    let username = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Username is required"));
    }

    let hits = social_candidates(username);

    let serialized = serde_json::to_value(&hits)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    state
        .shared
        .store
        .record_search(LookupKind::Social, username, &serialized)
        .await
        .map_err(|e| ApiError::database(e.to_string()))?;

    Ok(Json(hits))
}

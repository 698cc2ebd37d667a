use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, HealthResponse};

/// `GET /api/health`
///
/// Liveness probe; the response shape is part of the public contract. A
/// database that no longer answers surfaces as a 500 here rather than on the
/// next lookup.
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state
        .shared
        .store
        .ping()
        .await
        .map_err(|e| ApiError::database(e.to_string()))?;

    Ok(Json(HealthResponse { status: "ok" }))
}

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, HistoryEntryDto};
use crate::constants::limits::HISTORY_LIMIT;

/// `GET /api/history`
///
/// The most recent lookups, newest first, hard-capped at 50 entries.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HistoryEntryDto>>, ApiError> {
    let entries = state
        .shared
        .store
        .recent_searches(HISTORY_LIMIT)
        .await
        .map_err(|e| ApiError::database(e.to_string()))?;

    Ok(Json(entries.into_iter().map(HistoryEntryDto::from).collect()))
}

use axum::{Json, extract::rejection::JsonRejection};

use super::{ApiError, DorkRequest, DorkResponse};
use crate::services::generate_dorks;

/// `POST /api/tools/dork`
///
/// Pure template expansion; nothing is fetched and nothing is persisted.
pub async fn dork(
    request: Result<Json<DorkRequest>, JsonRejection>,
) -> Result<Json<DorkResponse>, ApiError> {
    let Json(request) = request?;
    let dorks = generate_dorks(&request.query, &request.query_type);
    Ok(Json(DorkResponse { dorks }))
}

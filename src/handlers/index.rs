use crate::models::IndexResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler - API metadata
///
/// Always answers with the same welcome payload. No request input is
/// consulted and nothing is mutated, so repeated calls are identical.
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "API metadata", body = IndexResponse)
    ),
    tag = "meta"
)]
pub async fn index_handler() -> (StatusCode, Json<IndexResponse>) {
    tracing::debug!("Serving API index");
    (StatusCode::OK, Json(IndexResponse::welcome()))
}

use crate::error::ApiError;
use axum::http::Uri;

/// Catch-all for unrouted paths, answered as a JSON 404
pub async fn fallback_handler(uri: Uri) -> ApiError {
    tracing::info!("No route for {}", uri.path());
    ApiError::RouteNotFound(uri.path().to_string())
}

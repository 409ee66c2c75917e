use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and renders it as an
/// `ErrorResponse` JSON body, so clients never see a bare text error.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the requested path
    RouteNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound(path) => {
                (StatusCode::NOT_FOUND, format!("No route for {}", path))
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

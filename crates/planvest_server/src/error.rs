use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use planvest_core::ProjectionError;
use serde_json::json;

/// Custom error types for the Planvest API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid parameter: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Projection failed: {0}")]
    Projection(#[from] ProjectionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::ValidationError { .. } => (StatusCode::BAD_REQUEST, self.to_string()),

            // Invalid input that slipped past request validation still maps
            // to 400; a non-finite projection is ours to own
            ApiError::Projection(ProjectionError::NotFinite { .. }) => {
                tracing::error!("projection overflow: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Projection(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;

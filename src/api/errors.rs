use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Message returned for every unexpected failure; details stay in the server log.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// API-specific error wrapper that converts AppError into HTTP responses.
///
/// Every error body has the shape `{ "error": true, "message": "..." }`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(_) | AppError::Catalog(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": true,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a JSON body rejection (syntax, wrong types, wrong content type) to a 400.
pub fn bad_json(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
}

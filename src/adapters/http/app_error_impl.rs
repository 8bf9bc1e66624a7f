use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        // Internal detail stays here; callers only see the envelope below.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::UnsupportedMediaType => error_resp(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected application/json",
            ),
            AppError::InvalidInput(msg) => error_resp(StatusCode::BAD_REQUEST, &msg),
            AppError::Sink(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process")
            }
        }
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "ok": false, "message": message });
    (status, Json(body)).into_response()
}

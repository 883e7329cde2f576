use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::use_cases::UseCaseError;

impl UseCaseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UseCaseError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            UseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
            UseCaseError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            UseCaseError::OperationFailed { .. } | UseCaseError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for UseCaseError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            UseCaseError::Validation(validation) => json!({
                "error": self.to_string(),
                "fieldErrors": validation.errors(),
            }),
            _ => json!({ "error": self.to_string() }),
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(body)).into_response()
    }
}

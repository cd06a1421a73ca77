use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_types::ValidationError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Export error: {0}")]
    Export(#[from] exporter::ExportError),
    #[error("Notifier error: {0}")]
    Notifier(#[from] notifier::error::NotifierError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every failure path ends here with a JSON error body; nothing crashes the
/// session, and the caller can always retry.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(validation_err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, validation_err.to_string())
            }
            AppError::InvalidEmail(address) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("'{address}' is not a valid email address"),
            ),
            AppError::Export(export_err) => {
                tracing::error!(error = ?export_err, "Export error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Report export failed; your calculated metrics are unaffected".to_string(),
                )
            }
            AppError::Notifier(notifier_err) => {
                tracing::error!(error = ?notifier_err, "Notifier error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Sending the report failed; you may retry without recalculating".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

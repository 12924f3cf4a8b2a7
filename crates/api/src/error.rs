use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use charlearn_core::error::CoreError;
use charlearn_importer::ImportError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus the store and import failures.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{"message": ..., "code": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `charlearn_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An import run stopped early.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// The spawned import task panicked or was cancelled.
    #[error("Import task aborted: {0}")]
    ImportAborted(#[from] tokio::task::JoinError),

    /// Reading the full character list failed.
    #[error("Error listing characters: {0}")]
    ListCharacters(#[source] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Import failures carry their cause back to the caller ---
            AppError::Import(err) => {
                tracing::error!(error = %err, "Character import failed");
                classify_import_error(err)
            }

            AppError::ImportAborted(err) => {
                tracing::error!(error = %err, "Character import task aborted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IMPORT_ABORTED",
                    self.to_string(),
                )
            }

            AppError::ListCharacters(err) => {
                tracing::error!(error = %err, "Listing characters failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LIST_FAILED",
                    self.to_string(),
                )
            }

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an import failure into an HTTP status, error code, and message.
///
/// - Payload missing an expected field: `"Key error: ..."`.
/// - Transport or non-2xx status from the ranking API:
///   `"Error fetching characters data: ..."`.
/// - Store failure mid-import: `"Error saving characters: ..."`.
///
/// All map to 500.
fn classify_import_error(err: &ImportError) -> (StatusCode, &'static str, String) {
    match err {
        ImportError::Remote(remote) if remote.is_malformed_payload() => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "KEY_ERROR",
            format!("Key error: {remote}"),
        ),
        ImportError::Remote(remote) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "FETCH_FAILED",
            format!("Error fetching characters data: {remote}"),
        ),
        ImportError::Database(db) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "STORE_FAILED",
            format!("Error saving characters: {db}"),
        ),
    }
}

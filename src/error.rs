use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Application error taxonomy.
///
/// `InvalidRequest` maps to 400; everything else surfaces as 500 with the
/// error's message in an `{"error": ...}` body. Provider failures inside tool
/// adapters never reach this type - adapters fold them into result strings.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) | AppError::Store(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

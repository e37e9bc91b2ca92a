use axum::{
    Json,
    extract::multipart::MultipartRejection,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum SiteError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("not authenticated")]
    Unauthorized,

    #[error("an administrator account already exists")]
    AlreadyInitialized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file exceeds the upload size limit")]
    TooLarge,

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session store error: {0}")]
    Session(String),
}

impl SiteError {
    pub fn validation(msg: impl Into<String>) -> Self {
        SiteError::Validation(msg.into())
    }
}

// Malformed requests share the validation envelope instead of axum's plain-text bodies.
impl From<JsonRejection> for SiteError {
    fn from(rejection: JsonRejection) -> Self {
        SiteError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for SiteError {
    fn from(rejection: QueryRejection) -> Self {
        SiteError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for SiteError {
    fn from(rejection: PathRejection) -> Self {
        SiteError::Validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for SiteError {
    fn from(rejection: MultipartRejection) -> Self {
        SiteError::Validation(rejection.body_text())
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            SiteError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            SiteError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid username or password.".to_string(),
            ),
            SiteError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required.".to_string(),
            ),
            SiteError::AlreadyInitialized => (
                StatusCode::BAD_REQUEST,
                "ALREADY_INITIALIZED",
                "An administrator account already exists.".to_string(),
            ),
            SiteError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{what} not found."),
            ),
            SiteError::UnsupportedType(_) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_TYPE",
                "File type not allowed. Use PNG, JPG or WebP.".to_string(),
            ),
            SiteError::TooLarge => (
                StatusCode::BAD_REQUEST,
                "TOO_LARGE",
                "File too large.".to_string(),
            ),
            SiteError::StoreUnavailable(detail) => {
                error!(error = %detail, "store health probe failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_UNAVAILABLE",
                    "Could not connect to the database. Check the DATABASE_URL setting."
                        .to_string(),
                )
            }
            SiteError::Database(SqlxError::RowNotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Record not found.".to_string(),
            ),
            SiteError::Database(_) | SiteError::Io(_) | SiteError::Session(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = ApiErrorBody {
            code: code.to_string(),
            message,
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

//! API-level error type and its HTTP status mapping.
//!
//! Every failure leaving a handler is an [`ApiError`]; each variant maps to
//! a distinct status code and every response body is the uniform envelope
//! `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

use db::DbError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed row does not exist (strict lookup mode only).
    #[error("{0}")]
    NotFound(String),

    /// The request payload is rejected before any SQL is issued.
    #[error("{0}")]
    Validation(String),

    /// The store rejected the statement with a constraint violation.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// The store could not be reached or the pool is exhausted.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Anything else — the catch-all 500.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Constraint(_) => StatusCode::CONFLICT,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Classify persistence failures into the API taxonomy.
///
/// Constraint violations (not-null, foreign-key, unique, check) become
/// `Constraint`; connectivity failures become `Unavailable`; everything
/// else falls through to `Internal`.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sqlx::Error::Database(db_err)) => match db_err.kind() {
                ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::CheckViolation => Self::Constraint(db_err.message().to_string()),
                _ => Self::Internal(db_err.message().to_string()),
            },
            DbError::Sqlx(
                e @ (sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed),
            ) => Self::Unavailable(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

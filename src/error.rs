//! Error types for the persistence and request layers
//!
//! `DbError` is what every repository operation returns. `ApiError` is what
//! route handlers return; it maps each failure kind to a status code and a
//! JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Persistence layer failure kinds
#[derive(Error, Debug)]
pub enum DbError {
    /// The requested row does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A uniqueness or foreign key constraint rejected the write
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other data-access failure
    #[error("storage error: {0}")]
    Storage(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound("row"),
            sqlx::Error::Database(ref db_err)
                if db_err.is_unique_violation() || db_err.is_foreign_key_violation() =>
            {
                DbError::Conflict(db_err.message().to_string())
            }
            other => DbError::Storage(other),
        }
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Request layer failure kinds
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("upload failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Db(DbError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Db(DbError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Db(DbError::Storage(_)) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::from(DbError::NotFound("album")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DbError::Conflict("x".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Unauthorized("Not logged in").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::BadRequest("no file".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}

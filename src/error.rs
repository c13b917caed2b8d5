//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database connection: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("invalid {resource} id")]
    InvalidId { resource: &'static str },
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("not found")]
    NotFound,
    #[error("failed to create {resource}")]
    CreateFailed {
        resource: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to {action} {resource}")]
    Operation {
        action: &'static str,
        resource: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Wraps a database error with the operation that hit it. Row-not-found stays a 404.
    pub fn operation(action: &'static str, resource: &'static str, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::RowNotFound => AppError::NotFound,
            source => AppError::Operation {
                action,
                resource,
                source,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Connection(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidId { .. } | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::CreateFailed { source, .. } => {
                if is_constraint_violation(source) {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::BAD_GATEWAY
                }
            }
            AppError::Operation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }
}

/// Rejected by a table constraint, i.e. the caller sent something the schema refuses.
fn is_constraint_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => matches!(
            db.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ),
        _ => false,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else if let AppError::CreateFailed { source, .. } = &self {
            tracing::warn!(error = %source, "create rejected by database");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(AppError::InvalidId { resource: "hero" }.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidBody("eof".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_is_404_wherever_it_surfaces() {
        assert_eq!(AppError::Db(sqlx::Error::RowNotFound).status(), StatusCode::NOT_FOUND);
        assert!(matches!(
            AppError::operation("update", "hero", sqlx::Error::RowNotFound),
            AppError::NotFound
        ));
    }

    #[test]
    fn create_failure_without_constraint_is_bad_gateway() {
        let err = AppError::CreateFailed {
            resource: "villain",
            source: sqlx::Error::PoolTimedOut,
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "failed to create villain");
    }

    #[test]
    fn other_database_failures_are_internal() {
        let err = AppError::operation("delete", "crime event", sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "failed to delete crime event");
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn client_errors_carry_plain_text_message() {
        let response = AppError::InvalidId { resource: "inventory item" }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"invalid inventory item id");
    }
}

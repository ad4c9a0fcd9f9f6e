//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation: {0}")]
    Validation(String),
    /// Carries the entity label, e.g. "Account" or "Call transcript".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ForeignKeyViolation(_) | AppError::UniqueViolation(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::Validation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ForeignKeyViolation(_) => "foreign_key_violation",
            AppError::UniqueViolation(_) => "unique_violation",
            AppError::Unavailable(_) => "unavailable",
            AppError::Db(_) => "database_error",
            AppError::BadRequest(_) => "bad_request",
        }
    }
}

/// Postgres' message plus its DETAIL line when present (e.g. "Key (email)=(a@b.c) already exists.").
fn native_detail(db: &dyn sqlx::error::DatabaseError) -> String {
    let detail = db
        .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
        .and_then(|pg| pg.detail());
    match detail {
        Some(d) => format!("{}: {}", db.message(), d),
        None => db.message().to_string(),
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            match db.kind() {
                ErrorKind::ForeignKeyViolation => {
                    return AppError::ForeignKeyViolation(native_detail(db.as_ref()))
                }
                ErrorKind::UniqueViolation => return AppError::UniqueViolation(native_detail(db.as_ref())),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return AppError::BadRequest(native_detail(db.as_ref()))
                }
                _ => {}
            }
            // SQLSTATE class 22 is bad input data, e.g. a value too long for its column.
            if db.code().is_some_and(|c| c.starts_with("22")) {
                return AppError::BadRequest(native_detail(db.as_ref()));
            }
        }
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => AppError::Unavailable(e.to_string()),
            _ => AppError::Db(e),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fyyur_core::error::CoreError;
use serde_json::json;
use sqlx::error::ErrorKind;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            AppError::Database(err) => classify_core_error(&classify_sqlx_error(err)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, error code, and client message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::ConstraintViolation(msg) => {
            (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION", msg.clone())
        }
        CoreError::Connection(msg) => {
            tracing::error!(error = %msg, "Database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "CONNECTION_ERROR",
                "The database is temporarily unavailable".to_string(),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into the domain taxonomy.
///
/// - `RowNotFound` -> internal (lookups use `fetch_optional`, so a missing
///   row here means a query expected one unconditionally).
/// - Foreign-key and unique violations -> constraint violation.
/// - Not-null and check violations (length limits are CHECKs) -> validation.
/// - I/O, TLS, pool timeouts, and a closed pool -> connection.
/// - Everything else -> internal.
pub fn classify_sqlx_error(err: &sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::RowNotFound => CoreError::Internal("query returned no rows".to_string()),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation => {
                    CoreError::ConstraintViolation(foreign_key_message(constraint))
                }
                ErrorKind::UniqueViolation => CoreError::ConstraintViolation(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                )),
                ErrorKind::NotNullViolation => {
                    let column = db_err
                        .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                        .and_then(|pg| pg.column())
                        .unwrap_or("unknown");
                    CoreError::Validation(format!("Missing required field: {column}"))
                }
                ErrorKind::CheckViolation => {
                    CoreError::Validation(format!("Value violates check constraint: {constraint}"))
                }
                _ => CoreError::Internal(db_err.to_string()),
            }
        }
        sqlx::Error::PoolClosed => CoreError::Connection("connection pool is closed".to_string()),
        other if fyyur_db::session::is_connection_error(other) => {
            CoreError::Connection(other.to_string())
        }
        other => CoreError::Internal(other.to_string()),
    }
}

fn foreign_key_message(constraint: &str) -> String {
    match constraint {
        "fk_shows_artist" => "Show must reference an existing artist".to_string(),
        "fk_shows_venue" => "Show must reference an existing venue".to_string(),
        other => format!("Foreign key constraint violated: {other}"),
    }
}

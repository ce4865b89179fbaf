//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It wraps the
//! domain-specific errors below and implements `IntoResponse`, so handlers can use `?`
//! and still answer with an appropriate status code and an `ErrorDto` body.
//!
//! The mutation pipeline fails with one of four outcomes, none of which is retried:
//!
//! - `AuthErr(AuthError::Unauthenticated)` → 401
//! - `InvalidInput` → 400
//! - `NotFound` → 404
//! - `Persistence` → 500

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for its status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database read error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A write to the database failed.
    ///
    /// The message names the operation that failed and is safe to show to the guest;
    /// the underlying error is only logged.
    #[error("{message}")]
    Persistence {
        /// User-facing description, e.g. "Booking could not be deleted"
        message: String,
        /// The database error that caused the failure
        #[source]
        source: sea_orm::DbErr,
    },

    /// SQLx driver error, e.g. migrating the session store table.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest, e.g. fetching the identity provider's userinfo.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Resource not found, or not owned by the signed-in guest.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// A submitted field failed validation or could not be coerced to its type.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    InvalidInput(String),

    /// Serializing a view into the cache failed.
    #[error(transparent)]
    SerdeJsonErr(#[from] serde_json::Error),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Wraps a failed write with the message shown to the guest.
    pub fn persistence(message: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Persistence {
            message: message.into(),
            source,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidInput`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `Persistence` (with its message) and every other
///   variant (with a generic message)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Persistence { message, source } => {
                tracing::error!("{}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto { error: message }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details do not leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No guest is signed in for the current request.
    ///
    /// Every account and booking mutation starts with this check and fails here before
    /// touching the database. Results in a 401 Unauthorized response.
    #[error("You must be logged in")]
    Unauthenticated,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state token in the callback URL does not match the token stored in the
    /// session. Results in a 400 Bad Request response.
    #[error("Failed to login guest due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The identity provider refused to exchange the authorization code.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `Unauthenticated` → 401 Unauthorized with "You must be logged in"
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `TokenExchange` → 500 Internal Server Error with a generic message, details logged
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

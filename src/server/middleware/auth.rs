use crate::server::{
    error::{auth::AuthError, AppError},
    model::session::GuestSession,
};

/// Authentication gate run first by every guest-scoped operation.
pub struct AuthGuard;

impl AuthGuard {
    /// Unwraps the request's principal or fails with `AuthError::Unauthenticated`.
    pub fn require(session: Option<&GuestSession>) -> Result<&GuestSession, AppError> {
        session.ok_or_else(|| AuthError::Unauthenticated.into())
    }
}

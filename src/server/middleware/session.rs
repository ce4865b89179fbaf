//! Typed access to the tower session.
//!
//! Each wrapper owns one concern of the session and its keys, so handlers never touch raw
//! session keys:
//! - `AuthSession` - the signed-in guest
//! - `CsrfSession` - the OAuth2 state token between login and callback

use tower_sessions::Session;

use crate::server::{error::AppError, model::session::GuestSession};

const SESSION_AUTH_GUEST: &str = "auth:guest";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// The signed-in guest of a session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// The guest signed in on this session, if any.
    ///
    /// The result is passed explicitly into every account and booking operation.
    ///
    /// # Returns
    /// - `Ok(Some(GuestSession))` - A guest is signed in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session store
    pub async fn current(&self) -> Result<Option<GuestSession>, AppError> {
        Ok(self.session.get::<GuestSession>(SESSION_AUTH_GUEST).await?)
    }

    /// Stores the principal after the identity provider has authenticated the guest.
    ///
    /// The session id is cycled so an id issued before sign-in cannot be reused after it.
    pub async fn sign_in(&self, guest: &GuestSession) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_GUEST, guest).await?;
        Ok(())
    }

    /// Destroys the session, signing the guest out.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF state for the OAuth2 login flow.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the state token sent to the identity provider.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes and returns the stored state token; each token validates one callback.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?)
    }
}

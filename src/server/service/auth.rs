//! Sign-in and sign-out.
//!
//! Both only touch the session: the identity provider has already vouched for the guest by
//! the time `sign_in` runs.

use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::session::AuthSession,
    model::{guest::Guest, session::GuestSession},
    navigation::Mutation,
};

pub struct AuthService<'a> {
    session: AuthSession<'a>,
}

impl<'a> AuthService<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session: AuthSession::new(session),
        }
    }

    /// Makes `guest` the principal of the session.
    ///
    /// # Returns
    /// - `Ok(Mutation::SignIn)` - Session id cycled and the guest stored
    /// - `Err(AppError::SessionErr)` - Failed to write the session store
    pub async fn sign_in(&self, guest: &Guest) -> Result<Mutation, AppError> {
        self.session
            .sign_in(&GuestSession {
                guest_id: guest.id,
                full_name: guest.full_name.clone(),
                email: guest.email.clone(),
            })
            .await?;

        tracing::info!(guest_id = guest.id, "Guest signed in");

        Ok(Mutation::SignIn { guest_id: guest.id })
    }

    /// Destroys the session.
    ///
    /// # Returns
    /// - `Ok(Mutation::SignOut)` - Session flushed, signing out an anonymous session included
    /// - `Err(AppError::SessionErr)` - Failed to write the session store
    pub async fn sign_out(&self) -> Result<Mutation, AppError> {
        self.session.clear().await?;

        Ok(Mutation::SignOut)
    }
}

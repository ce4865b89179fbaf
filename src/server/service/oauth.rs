//! Google sign-in over the OAuth2 authorization-code flow.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::guest::GuestRepository,
    error::{auth::AuthError, AppError},
    model::guest::{CreateGuestParams, Guest},
    state::OAuth2Client,
};

/// Subset of the OpenID Connect userinfo response used to identify a guest.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Orchestrates Google sign-in: the authorization URL, the code exchange and matching the
/// Google account to a guest.
pub struct GoogleAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates the Google consent URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state token to validate on callback
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Exchanges the authorization code and signs the Google account in as a guest.
    ///
    /// Nothing is retried; a provider failure fails the sign-in.
    ///
    /// # Returns
    /// - `Ok(Guest)` - Existing or newly created guest for the account's email
    /// - `Err(AppError::AuthErr(TokenExchange))` - Google refused the code
    /// - `Err(AppError::ReqwestErr)` - Fetching userinfo failed
    /// - `Err(AppError::DbErr)` - Looking up or creating the guest failed
    pub async fn callback(&self, authorization_code: String) -> Result<Guest, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user_info = self.fetch_user_info(&token).await?;

        self.find_or_create_guest(user_info).await
    }

    /// Finds the guest registered under the account's email, registering one on first
    /// sign-in.
    pub async fn find_or_create_guest(&self, user_info: GoogleUserInfo) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        if let Some(guest) = repo.find_by_email(&user_info.email).await? {
            return Ok(guest);
        }

        let full_name = user_info
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| user_info.email.clone());

        let guest = repo
            .create(CreateGuestParams {
                full_name,
                email: user_info.email,
            })
            .await?;

        tracing::info!(guest_id = guest.id, "Registered new guest");

        Ok(guest)
    }

    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleUserInfo, AppError> {
        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await?;

        Ok(user_info)
    }
}

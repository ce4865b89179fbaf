use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, session::SessionDto},
    server::{
        controller::navigate,
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        service::{auth::AuthService, oauth::GoogleAuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters Google appends to the redirect back to the callback.
#[derive(Deserialize, IntoParams)]
pub struct CallbackParams {
    /// CSRF state token, must match the one stored at login.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Start Google sign-in.
///
/// Stores a CSRF token in the session and redirects to Google's consent screen.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish Google sign-in.
///
/// Validates the CSRF state, exchanges the code, signs the guest in (registering them on
/// first sign-in) and redirects to the account page.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 303, description = "Signed in, redirect to /account"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Google sign-in failed", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let stored = CsrfSession::new(&session).take_token().await?;
    if stored.as_deref() != Some(params.state.as_str()) {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    let auth_service = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );
    let guest = auth_service.callback(params.code).await?;

    let mutation = AuthService::new(&session).sign_in(&guest).await?;

    Ok(navigate(&mutation))
}

/// Sign out and return to the home page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Signed out, redirect to /"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let mutation = AuthService::new(&session).sign_out().await?;

    Ok(navigate(&mutation))
}

/// Sign out from a form submission.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Signed out, redirect to /"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout_form(session: Session) -> Result<impl IntoResponse, AppError> {
    logout(session).await
}

/// Get the signed-in guest.
///
/// # Returns
/// - `200 OK` - The session's guest
/// - `404 Not Found` - Nobody is signed in
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in guest", body = SessionDto),
        (status = 404, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, AppError> {
    let Some(guest) = AuthSession::new(&session).current().await? else {
        return Err(AppError::NotFound("Not signed in".to_string()));
    };

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

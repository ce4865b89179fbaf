//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler by axum's `State`
//! extractor. Every field is cheap to clone: the connection pool, the reqwest and OAuth2
//! clients and the view cache all share their internals.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::view_cache::ViewCache;

/// Type alias for the OAuth2 client configured for Google sign-in.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the guests, cabins and bookings tables.
    pub db: DatabaseConnection,

    /// HTTP client for identity provider requests. Does not follow redirects.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google authorization-code flow.
    pub oauth_client: OAuth2Client,

    /// Endpoint returning the signed-in account's email and name.
    pub userinfo_url: String,

    /// Rendered views, invalidated by mutations.
    pub view_cache: ViewCache,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        userinfo_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            view_cache: ViewCache::new(),
        }
    }
}

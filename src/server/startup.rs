use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a table in the application database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the HTTP client used for identity provider requests.
///
/// Redirects are disabled so a provider response cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for Google sign-in from configuration.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|e| invalid_url("google_auth_url", e))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|e| invalid_url("google_token_url", e))?;
    let redirect_url = RedirectUrl::new(config.google_redirect_url.clone())
        .map_err(|e| invalid_url("GOOGLE_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}

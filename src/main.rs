mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cabin_booking=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        config.google_userinfo_url.clone(),
    );

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! Filmoteca Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filmoteca_engine::{
    api,
    config::{load_dotenv_from_repo_root, EngineConfig},
    infrastructure::{clock::SystemClock, sqlite::SqliteMovieRepo},
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filmoteca_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Filmoteca Engine");

    // Load configuration
    let config = EngineConfig::from_env()?;

    // Open the catalog
    tracing::info!(path = %config.database_path.display(), "Opening movie database");
    let movies = Arc::new(SqliteMovieRepo::open(&config.database_path).await?);

    // Create application
    let app = Arc::new(App::new(movies, Arc::new(SystemClock::new())));

    let router = api::router(app, &config.cors_origins);

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medialib_server::config::Config;
use medialib_server::{build_router, init_database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medialib_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting Medialib Server v{}", env!("CARGO_PKG_VERSION"));

    // Open SQLite, create tables, seed the default account
    let pool = init_database(&config).await?;
    tracing::info!("Database ready: {}", config.database_path.display());

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tracing::info!("Upload directory: {}", config.upload_dir.display());

    let state = Arc::new(AppState::new(config, pool)?);
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

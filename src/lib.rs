//! Personal media library server
//!
//! Users log in, upload songs, browse them alone or by album, and keep a
//! list of favourites. Everything is stored in one embedded SQLite file.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use anyhow::anyhow;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::services::uploads::UPLOADS_PREFIX;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
    pub cookie_key: Key,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let cookie_key = Key::try_from(config.session_secret.as_bytes())
            .map_err(|e| anyhow!("SESSION_SECRET must be at least 64 bytes: {}", e))?;

        Ok(Self {
            config,
            pool,
            cookie_key,
            start_time: Instant::now(),
        })
    }
}

/// Open the database, create the schema and seed the default account
pub async fn init_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let pool = db::create_pool(config).await?;
    db::initialize_schema(&pool).await?;
    db::seed_default_user(&pool, &config.default_username, &config.default_password).await?;
    Ok(pool)
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes());
    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        // Health endpoints
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/live", get(routes::health::live))
        // Session endpoints
        .route("/login", post(routes::auth::login))
        .route("/logout", post(routes::auth::logout))
        .route("/home", get(routes::auth::home))
        // Songs
        .route("/songs", get(routes::songs::list_songs))
        .route("/songs/:id", get(routes::songs::play_song))
        .route(
            "/upload",
            post(routes::songs::upload_song).layer(upload_limit),
        )
        // Albums
        .route("/albums", get(routes::albums::list_albums))
        .route("/albums/:id", get(routes::albums::album_songs))
        // Favourites
        .route("/favourites", get(routes::favourites::list_favourites))
        .route(
            "/favourites/:song_id/toggle",
            post(routes::favourites::toggle_favourite),
        )
        // Uploaded media
        .nest_service(&format!("/{}", UPLOADS_PREFIX), uploads)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Schema creation and startup seeding
//!
//! Every statement is `IF NOT EXISTS` / existence-checked, so both entry
//! points are safe to run on every process start.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::db::repository::users;
use crate::error::{DbError, DbResult};

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE,
        password TEXT
    )
"#;

const CREATE_ALBUMS: &str = r#"
    CREATE TABLE IF NOT EXISTS albums (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE,
        image_path TEXT
    )
"#;

const CREATE_SONGS: &str = r#"
    CREATE TABLE IF NOT EXISTS songs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        file_path TEXT UNIQUE NOT NULL,
        album_id INTEGER,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (album_id) REFERENCES albums(id)
    )
"#;

const CREATE_FAVOURITES: &str = r#"
    CREATE TABLE IF NOT EXISTS favourites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        song_id INTEGER NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        UNIQUE(user_id, song_id),
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (song_id) REFERENCES songs(id)
    )
"#;

/// Create all tables if absent
pub async fn initialize_schema(pool: &SqlitePool) -> DbResult<()> {
    let mut tx = pool.begin().await?;

    for statement in [CREATE_USERS, CREATE_ALBUMS, CREATE_SONGS, CREATE_FAVOURITES] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    debug!("Schema initialized");

    Ok(())
}

/// Ensure the default account exists; no-op when the username is taken
pub async fn seed_default_user(pool: &SqlitePool, username: &str, password: &str) -> DbResult<()> {
    if users::find_id_by_username(pool, username).await?.is_some() {
        debug!("Default user '{}' already present", username);
        return Ok(());
    }

    match users::create(pool, username, password).await {
        Ok(id) => {
            info!("Seeded default user '{}' (id {})", username, id);
            Ok(())
        }
        // Another process seeded it between the check and the insert
        Err(DbError::Conflict(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

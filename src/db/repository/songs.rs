//! Songs repository
//!
//! Listings are newest first. `created_at` only has second resolution, so
//! the id breaks ties between songs stored within the same second.

use sqlx::SqlitePool;

use crate::db::models::{SongInsert, SongRow};
use crate::error::{DbError, DbResult};

/// Insert a song, ignoring the write if the file path is already stored.
///
/// Returns the id of the new row, or of the existing row for that path.
pub async fn add(
    pool: &SqlitePool,
    title: &str,
    file_path: &str,
    album_id: Option<i64>,
) -> DbResult<SongInsert> {
    let inserted: Option<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO songs (title, file_path, album_id)
        VALUES (?, ?, ?)
        ON CONFLICT (file_path) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(file_path)
    .bind(album_id)
    .fetch_optional(pool)
    .await?;

    if let Some(id) = inserted {
        tracing::info!("Stored song '{}' at {} (id {})", title, file_path, id);
        return Ok(SongInsert::Created(id));
    }

    let existing: i64 = sqlx::query_scalar("SELECT id FROM songs WHERE file_path = ?")
        .bind(file_path)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound("song"))?;

    tracing::debug!("Song at {} already stored (id {})", file_path, existing);
    Ok(SongInsert::AlreadyExists(existing))
}

/// Get all songs, newest first
pub async fn list_all(pool: &SqlitePool) -> DbResult<Vec<SongRow>> {
    let rows = sqlx::query_as::<_, SongRow>(
        r#"
        SELECT id, title, file_path, album_id, created_at
        FROM songs
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get a song by id
pub async fn get_by_id(pool: &SqlitePool, song_id: i64) -> DbResult<SongRow> {
    sqlx::query_as::<_, SongRow>(
        r#"
        SELECT id, title, file_path, album_id, created_at
        FROM songs
        WHERE id = ?
        "#,
    )
    .bind(song_id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound("song"))
}

/// Get the most recently stored song, if any
pub async fn most_recent(pool: &SqlitePool) -> DbResult<Option<SongRow>> {
    let row = sqlx::query_as::<_, SongRow>(
        r#"
        SELECT id, title, file_path, album_id, created_at
        FROM songs
        ORDER BY created_at DESC, id DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Get the songs of one album, newest first
pub async fn list_by_album(pool: &SqlitePool, album_id: i64) -> DbResult<Vec<SongRow>> {
    let rows = sqlx::query_as::<_, SongRow>(
        r#"
        SELECT id, title, file_path, album_id, created_at
        FROM songs
        WHERE album_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(album_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count stored songs
pub async fn count(pool: &SqlitePool) -> DbResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

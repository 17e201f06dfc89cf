//! Favourites repository
//!
//! A favourite is a (user, song) pair. Toggling flips its presence.

use sqlx::SqlitePool;

use crate::db::models::{FavouriteSongRow, FavouriteState};
use crate::error::DbResult;

/// Add the favourite if absent, remove it if present.
///
/// Runs in one transaction. An unknown user or song fails the foreign key
/// check and surfaces as `DbError::Conflict`.
pub async fn toggle(pool: &SqlitePool, user_id: i64, song_id: i64) -> DbResult<FavouriteState> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM favourites WHERE user_id = ? AND song_id = ?")
            .bind(user_id)
            .bind(song_id)
            .fetch_optional(&mut *tx)
            .await?;

    let state = match existing {
        Some(id) => {
            sqlx::query("DELETE FROM favourites WHERE id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            FavouriteState::Removed
        }
        None => {
            sqlx::query("INSERT INTO favourites (user_id, song_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(song_id)
                .execute(&mut *tx)
                .await?;
            FavouriteState::Added
        }
    };

    tx.commit().await?;
    tracing::debug!("Favourite user={} song={} -> {:?}", user_id, song_id, state);

    Ok(state)
}

/// Whether the user has favourited the song
pub async fn is_favourite(pool: &SqlitePool, user_id: i64, song_id: i64) -> DbResult<bool> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT id FROM favourites WHERE user_id = ? AND song_id = ?")
            .bind(user_id)
            .bind(song_id)
            .fetch_optional(pool)
            .await?;

    Ok(found.is_some())
}

/// Get a user's favourite songs with album details, most recently favourited first
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> DbResult<Vec<FavouriteSongRow>> {
    let rows = sqlx::query_as::<_, FavouriteSongRow>(
        r#"
        SELECT
            songs.id,
            songs.title,
            songs.file_path,
            albums.name AS album_name,
            albums.image_path
        FROM favourites
        JOIN songs ON favourites.song_id = songs.id
        LEFT JOIN albums ON songs.album_id = albums.id
        WHERE favourites.user_id = ?
        ORDER BY favourites.created_at DESC, favourites.id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

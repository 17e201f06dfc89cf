//! Song endpoints: listing, playing and uploading

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::repository::{favourites, songs};
use crate::db::SongRow;
use crate::error::ApiError;
use crate::models::library::{SongResponse, UploadResponse};
use crate::routes::auth::CurrentUser;
use crate::services::uploads;
use crate::AppState;

/// Multipart field carrying the uploaded file
const SONG_FILE_FIELD: &str = "song_file";

/// GET /songs - All songs, newest first
pub async fn list_songs(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
) -> Result<Json<Vec<SongRow>>, ApiError> {
    let rows = songs::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /songs/:id - One song, with the caller's favourite flag
pub async fn play_song(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(song_id): Path<i64>,
) -> Result<Json<SongResponse>, ApiError> {
    let song = songs::get_by_id(&state.pool, song_id).await?;
    let is_favourite = favourites::is_favourite(&state.pool, user.user_id, song_id).await?;

    Ok(Json(SongResponse { song, is_favourite }))
}

/// POST /upload - Store an uploaded file and record it as a song
///
/// A file whose sanitised name is already recorded is written to disk again
/// but the song row is left as it was.
pub async fn upload_song(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(SONG_FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .and_then(uploads::sanitize_filename)
            .ok_or_else(|| ApiError::BadRequest("Invalid file name".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        uploads::save(&state.config.upload_dir, &filename, &data).await?;

        let inserted =
            songs::add(&state.pool, &filename, &uploads::stored_path(&filename), None).await?;
        let song = songs::get_by_id(&state.pool, inserted.id()).await?;

        return Ok(Json(UploadResponse {
            created: inserted.is_created(),
            song,
        }));
    }

    Err(ApiError::BadRequest(format!(
        "Missing '{}' file",
        SONG_FILE_FIELD
    )))
}

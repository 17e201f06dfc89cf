//! Album endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::repository::{albums, songs};
use crate::db::AlbumRow;
use crate::error::ApiError;
use crate::models::library::AlbumSongsResponse;
use crate::routes::auth::CurrentUser;
use crate::AppState;

/// GET /albums - All albums
pub async fn list_albums(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
) -> Result<Json<Vec<AlbumRow>>, ApiError> {
    let rows = albums::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /albums/:id - Album details and its songs, newest first
pub async fn album_songs(
    State(state): State<Arc<AppState>>,
    _user: CurrentUser,
    Path(album_id): Path<i64>,
) -> Result<Json<AlbumSongsResponse>, ApiError> {
    let album = albums::get_by_id(&state.pool, album_id).await?;
    let songs = songs::list_by_album(&state.pool, album_id).await?;

    Ok(Json(AlbumSongsResponse { album, songs }))
}

//! Favourite endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::repository::{favourites, songs};
use crate::db::FavouriteSongRow;
use crate::error::ApiError;
use crate::models::library::ToggleFavouriteResponse;
use crate::routes::auth::CurrentUser;
use crate::AppState;

/// GET /favourites - The caller's favourite songs, most recent first
pub async fn list_favourites(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<FavouriteSongRow>>, ApiError> {
    let rows = favourites::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(rows))
}

/// POST /favourites/:song_id/toggle - Flip the favourite flag on a song
pub async fn toggle_favourite(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(song_id): Path<i64>,
) -> Result<Json<ToggleFavouriteResponse>, ApiError> {
    // 404 instead of a foreign key conflict for unknown songs
    songs::get_by_id(&state.pool, song_id).await?;

    let outcome = favourites::toggle(&state.pool, user.user_id, song_id).await?;

    tracing::info!(
        "User '{}' {:?} favourite song {}",
        user.username,
        outcome,
        song_id
    );

    Ok(Json(ToggleFavouriteResponse {
        song_id,
        favourite: outcome.is_favourite(),
    }))
}

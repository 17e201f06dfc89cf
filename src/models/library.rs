//! JSON views returned by the library endpoints

use serde::Serialize;

use crate::db::{AlbumRow, SongRow};

/// Response for an upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// False when a song with the same file path was already stored
    pub created: bool,
    pub song: SongRow,
}

/// Response for a single song (the "play" view)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub song: SongRow,
    pub is_favourite: bool,
}

/// Response for an album page
#[derive(Debug, Serialize)]
pub struct AlbumSongsResponse {
    pub album: AlbumRow,
    pub songs: Vec<SongRow>,
}

/// Response for a favourite toggle
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavouriteResponse {
    pub song_id: i64,
    pub favourite: bool,
}

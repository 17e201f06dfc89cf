//! Database row types for SQLite
//!
//! Field names double as the JSON contract with the views.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Album row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct AlbumRow {
    pub id: i64,
    pub name: String,
    pub image_path: Option<String>,
}

/// Song row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SongRow {
    pub id: i64,
    pub title: String,
    pub file_path: String,
    pub album_id: Option<i64>,
    pub created_at: NaiveDateTime,
}

/// A favourited song joined with its album, if any
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct FavouriteSongRow {
    pub id: i64,
    pub title: String,
    pub file_path: String,
    pub album_name: Option<String>,
    pub image_path: Option<String>,
}

/// Outcome of inserting a song; both variants carry the row id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongInsert {
    Created(i64),
    /// A song with the same file path was already stored and is unchanged
    AlreadyExists(i64),
}

impl SongInsert {
    pub fn id(self) -> i64 {
        match self {
            SongInsert::Created(id) | SongInsert::AlreadyExists(id) => id,
        }
    }

    pub fn is_created(self) -> bool {
        matches!(self, SongInsert::Created(_))
    }
}

/// Favourite state after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteState {
    Added,
    Removed,
}

impl FavouriteState {
    pub fn is_favourite(self) -> bool {
        self == FavouriteState::Added
    }
}

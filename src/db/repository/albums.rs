//! Albums repository

use sqlx::SqlitePool;

use crate::db::models::AlbumRow;
use crate::error::{DbError, DbResult};

/// Return the id of the album with this name, creating it if needed.
///
/// The insert is a no-op when the name already exists, so concurrent callers
/// with the same name all end up reading the same row. The image path of an
/// existing album is left untouched.
pub async fn get_or_create(
    pool: &SqlitePool,
    name: &str,
    image_path: Option<&str>,
) -> DbResult<i64> {
    let inserted: Option<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO albums (name, image_path)
        VALUES (?, ?)
        ON CONFLICT (name) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(image_path)
    .fetch_optional(pool)
    .await?;

    if let Some(id) = inserted {
        tracing::info!("Created album '{}' (id {})", name, id);
        return Ok(id);
    }

    sqlx::query_scalar("SELECT id FROM albums WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound("album"))
}

/// Get all albums (no particular order)
pub async fn list_all(pool: &SqlitePool) -> DbResult<Vec<AlbumRow>> {
    let rows = sqlx::query_as::<_, AlbumRow>("SELECT id, name, image_path FROM albums")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Get an album by id
pub async fn get_by_id(pool: &SqlitePool, album_id: i64) -> DbResult<AlbumRow> {
    sqlx::query_as::<_, AlbumRow>("SELECT id, name, image_path FROM albums WHERE id = ?")
        .bind(album_id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound("album"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::test_pool;

    #[tokio::test]
    async fn test_get_or_create_returns_same_id() {
        let pool = test_pool().await;

        let first = get_or_create(&pool, "Blue", Some("covers/blue.jpg")).await.unwrap();
        let second = get_or_create(&pool, "Blue", None).await.unwrap();
        assert_eq!(first, second);

        let albums = list_all(&pool).await.unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].image_path.as_deref(), Some("covers/blue.jpg"));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let pool = test_pool().await;
        let id = get_or_create(&pool, "Kind of Blue", None).await.unwrap();

        let album = get_by_id(&pool, id).await.unwrap();
        assert_eq!(album.name, "Kind of Blue");
        assert_eq!(album.image_path, None);

        assert!(matches!(
            get_by_id(&pool, id + 100).await,
            Err(DbError::NotFound("album"))
        ));
    }

    #[tokio::test]
    async fn test_distinct_names_create_distinct_albums() {
        let pool = test_pool().await;

        let a = get_or_create(&pool, "A", None).await.unwrap();
        let b = get_or_create(&pool, "B", None).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(list_all(&pool).await.unwrap().len(), 2);
    }
}

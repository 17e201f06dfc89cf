//! Users repository
//!
//! Passwords are stored and compared as given.

use sqlx::SqlitePool;

use crate::error::DbResult;

/// Insert a user and return its id
pub async fn create(pool: &SqlitePool, username: &str, password: &str) -> DbResult<i64> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO users (username, password)
        VALUES (?, ?)
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(password)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Look up a user id by username
pub async fn find_id_by_username(pool: &SqlitePool, username: &str) -> DbResult<Option<i64>> {
    let id = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(id)
}

/// Exact-match credential check; `None` when the username or password is wrong
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> DbResult<Option<i64>> {
    let id = sqlx::query_scalar("SELECT id FROM users WHERE username = ? AND password = ?")
        .bind(username)
        .bind(password)
        .fetch_optional(pool)
        .await?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::test_pool;
    use crate::error::DbError;

    #[tokio::test]
    async fn test_authenticate() {
        let pool = test_pool().await;
        let alice = create(&pool, "alice", "pw1").await.unwrap();

        assert_eq!(authenticate(&pool, "alice", "pw1").await.unwrap(), Some(alice));
        assert_eq!(authenticate(&pool, "alice", "wrong").await.unwrap(), None);
        assert_eq!(authenticate(&pool, "bob", "pw1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let pool = test_pool().await;
        create(&pool, "alice", "pw1").await.unwrap();

        let err = create(&pool, "alice", "pw2").await.unwrap_err();
        assert!(matches!(err, DbError::Conflict(_)));
    }
}

//! End-to-end persistence scenario against a file-backed database

use medialib_server::config::Config;
use medialib_server::db::repository::{favourites, songs, users};
use medialib_server::db::{self, FavouriteState, SongInsert};

#[tokio::test]
async fn test_login_upload_and_favourite_flow() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database_path: dir.path().join("media.db"),
        ..Config::default()
    };

    let pool = db::create_pool(&config).await.unwrap();
    db::initialize_schema(&pool).await.unwrap();
    // Schema creation is safe to repeat on every start
    db::initialize_schema(&pool).await.unwrap();

    let alice = users::create(&pool, "alice", "pw1").await.unwrap();
    assert_eq!(users::authenticate(&pool, "alice", "pw1").await.unwrap(), Some(alice));
    assert_eq!(users::authenticate(&pool, "alice", "wrong").await.unwrap(), None);

    let song = songs::add(&pool, "Song A", "uploads/a.mp3", None).await.unwrap();
    assert!(matches!(song, SongInsert::Created(_)));
    assert_eq!(
        songs::add(&pool, "Song A", "uploads/a.mp3", None).await.unwrap(),
        SongInsert::AlreadyExists(song.id())
    );
    assert_eq!(songs::count(&pool).await.unwrap(), 1);

    assert_eq!(
        favourites::toggle(&pool, alice, song.id()).await.unwrap(),
        FavouriteState::Added
    );
    assert!(favourites::is_favourite(&pool, alice, song.id()).await.unwrap());

    assert_eq!(
        favourites::toggle(&pool, alice, song.id()).await.unwrap(),
        FavouriteState::Removed
    );
    assert!(!favourites::is_favourite(&pool, alice, song.id()).await.unwrap());

    // Data survives reopening the file
    pool.close().await;
    let reopened = db::create_pool(&config).await.unwrap();
    assert_eq!(songs::count(&reopened).await.unwrap(), 1);
}

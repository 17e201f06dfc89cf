//! Database module
//!
//! SQLite integration using sqlx with:
//! - Connection pool management
//! - Idempotent schema creation and default-user seeding
//! - Row types with FromRow
//! - Repository pattern for data access

pub mod models;
pub mod pool;
pub mod repository;
pub mod schema;

// Re-export commonly used items
pub use models::{AlbumRow, FavouriteSongRow, FavouriteState, SongInsert, SongRow};
pub use pool::{create_pool, health_check};
pub use schema::{initialize_schema, seed_default_user};

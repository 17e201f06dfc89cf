//! Database repositories
//!
//! Repository pattern for database access, separating data access logic
//! from the request handlers.

pub mod albums;
pub mod favourites;
pub mod songs;
pub mod users;

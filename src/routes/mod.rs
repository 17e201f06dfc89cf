pub mod albums;
pub mod auth;
pub mod favourites;
pub mod health;
pub mod songs;

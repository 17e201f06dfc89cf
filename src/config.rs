use std::env;
use std::path::PathBuf;

/// Development-only signing secret; set SESSION_SECRET in any real deployment
const DEV_SESSION_SECRET: &str =
    "medialib-development-session-secret-change-me-0123456789abcdef0123456789abcdef";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // SQLite
    pub database_path: PathBuf,
    pub db_max_connections: u32,

    // Uploads
    pub upload_dir: PathBuf,
    pub max_upload_mb: usize,

    // Session
    pub session_secret: String,

    // Default account seeded on startup
    pub default_username: String,
    pub default_password: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            // SQLite
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "database/media.db".to_string())
                .into(),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            // Uploads
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "static/uploads".to_string())
                .into(),
            max_upload_mb: env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),

            // Session
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| DEV_SESSION_SECRET.to_string()),

            // Default account
            default_username: env::var("DEFAULT_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            default_password: env::var("DEFAULT_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
        }
    }

    /// Request body limit for uploads, in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_secret_is_long_enough_for_signing() {
        // Cookie signing keys need at least 64 bytes
        assert!(DEV_SESSION_SECRET.len() >= 64);
    }

    #[test]
    fn test_max_upload_bytes() {
        let config = Config {
            max_upload_mb: 2,
            ..Config::default()
        };
        assert_eq!(config.max_upload_bytes(), 2 * 1024 * 1024);
    }

    #[test]
    fn test_max_upload_bytes_saturates() {
        let config = Config {
            max_upload_mb: usize::MAX,
            ..Config::default()
        };
        assert_eq!(config.max_upload_bytes(), usize::MAX);
    }
}

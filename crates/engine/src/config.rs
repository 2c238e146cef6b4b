//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::api::auth::AdminCredentials;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// SQLite database file
    pub database_path: String,
    /// Digest the admin password is checked against
    pub admin: AdminCredentials,
    /// CORS allowed origins (comma-separated, or "*" for any). Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let admin = match lookup("ADMIN_PASSWORD_SHA256").filter(|v| !v.trim().is_empty()) {
            Some(digest) => AdminCredentials::from_hex_digest(&digest)
                .context("ADMIN_PASSWORD_SHA256 must be a hex-encoded SHA-256 digest")?,
            None => AdminCredentials::disabled(),
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            database_path: lookup("DATABASE_PATH")
                .unwrap_or_else(|| "paradox_wheel.db".to_string()),
            admin,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}

/// Loads `.env.local` then `.env` from the repository root, if present.
///
/// Earlier files win because dotenvy never overrides a variable that is
/// already set.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

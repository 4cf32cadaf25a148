//! Environment-driven configuration for the Atrium backend.
//!
//! A local `.env` file is honored during development; deployment
//! platforms provide the variables directly.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub uploads: UploadsConfig,
    pub auth: AuthConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection URL. When absent the server runs against the
    /// in-memory store (development and tests only).
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UploadsConfig {
    /// Root directory uploaded files are written beneath and served from.
    pub root: PathBuf,
}

impl UploadsConfig {
    pub fn gallery_dir(&self) -> PathBuf {
        self.root.join("gallery")
    }

    pub fn team_dir(&self) -> PathBuf {
        self.root.join("team")
    }

    pub fn ensure_directories(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.gallery_dir())?;
        std::fs::create_dir_all(self.team_dir())?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for admin bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime, minutes.
    pub token_expiry_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {reason}")]
    Invalid {
        name: &'static str,
        reason: String,
    },
}

impl Config {
    /// Load from the process environment, reading `.env` first when
    /// present.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is the normal case on deployed instances.
        let _ = dotenvy::dotenv();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => 8000,
        };

        let token_expiry_minutes = match std::env::var("TOKEN_EXPIRY_MINUTES")
        {
            Ok(raw) => raw.parse::<i64>().map_err(|e| ConfigError::Invalid {
                name: "TOKEN_EXPIRY_MINUTES",
                reason: e.to_string(),
            })?,
            Err(_) => 60,
        };

        let jwt_secret = std::env::var("JWT_SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET_KEY not set; using the development default"
            );
            "atrium-dev-secret-key".to_string()
        });

        Ok(Self {
            server: ServerConfig {
                host: std::env::var("HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL").ok(),
            },
            uploads: UploadsConfig {
                root: std::env::var("UPLOADS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("uploads")),
            },
            auth: AuthConfig {
                jwt_secret,
                token_expiry_minutes,
            },
            seed: SeedConfig {
                admin_username: std::env::var("ADMIN_USERNAME")
                    .unwrap_or_else(|_| "atrium_admin".to_string()),
                admin_password: std::env::var("ADMIN_PASSWORD")
                    .unwrap_or_else(|_| "change-me-on-first-deploy".to_string()),
            },
        })
    }
}

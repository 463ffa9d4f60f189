use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Username to ensure exists at startup, with a freshly minted API token
    /// logged once. Used to bootstrap access on an empty database.
    pub bootstrap_user: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            bootstrap_user: std::env::var("BOOTSTRAP_USER").ok(),
        })
    }
}

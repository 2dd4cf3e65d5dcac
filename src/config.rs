use sqlx::postgres::PgConnectOptions;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub max_connections: u32,
    pub fixtures_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let db_user = required(&env_map, "DB_USER")?;
        let db_name = required(&env_map, "DB_NAME")?;

        let db_password = env_map.get("DB_PASSWORD").cloned().unwrap_or_default();

        let db_host = env_map
            .get("DB_HOST")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or("localhost")
            .to_string();

        let db_port = env_map
            .get("DB_PORT")
            .map(|s| s.as_str())
            .unwrap_or("5432")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("DB_PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let max_connections = env_map
            .get("DB_MAX_CONNECTIONS")
            .map(|s| s.as_str())
            .unwrap_or("5")
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "DB_MAX_CONNECTIONS".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let fixtures_path = env_map
            .get("FIXTURES_PATH")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            db_user,
            db_password,
            db_host,
            db_port,
            db_name,
            max_connections,
            fixtures_path,
        })
    }

    /// Connection options for the configured PostgreSQL database.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_user", &self.db_user)
            .field("db_password", &"<redacted>")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("max_connections", &self.max_connections)
            .field("fixtures_path", &self.fixtures_path)
            .finish()
    }
}

fn required(env_map: &HashMap<String, String>, key: &str) -> Result<String, ConfigError> {
    env_map
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingEnv(key.to_string()))
}

//! Raw file config and the resolved settings the server runs with.

use axum::http::HeaderValue;
use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_NPS_BASE_URL: &str = "https://developer.nps.gov/api/v1";

/// Keys accepted in the JSON config file. Every key is optional; environment variables override them.
#[derive(Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub rds_host: Option<String>,
    #[serde(default)]
    pub rds_user: Option<String>,
    #[serde(default)]
    pub rds_password: Option<String>,
    #[serde(default)]
    pub rds_port: Option<u16>,
    #[serde(default)]
    pub rds_db: Option<String>,
    #[serde(default)]
    pub server_host: Option<String>,
    #[serde(default)]
    pub server_port: Option<u16>,
    #[serde(default)]
    pub cors_origin: Option<String>,
    #[serde(default)]
    pub nps_base_url: Option<String>,
    #[serde(default)]
    pub nps_api_key: Option<String>,
}

#[derive(Clone)]
pub enum DatabaseSettings {
    /// Full connection URL (`DATABASE_URL`).
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: Option<String>,
        password: Option<String>,
        database: String,
    },
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, ConfigError> {
        match self {
            DatabaseSettings::Url(url) => url.parse::<MySqlConnectOptions>().map_err(|e| ConfigError::Invalid {
                key: "DATABASE_URL",
                reason: e.to_string(),
            }),
            DatabaseSettings::Parts {
                host,
                port,
                user,
                password,
                database,
            } => {
                let mut opts = MySqlConnectOptions::new().host(host).port(*port).database(database);
                if let Some(user) = user {
                    opts = opts.username(user);
                }
                if let Some(password) = password {
                    opts = opts.password(password);
                }
                Ok(opts)
            }
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseSettings::Url(_) => f.write_str("DatabaseSettings::Url(<redacted>)"),
            DatabaseSettings::Parts { host, port, user, database, .. } => f
                .debug_struct("DatabaseSettings::Parts")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("database", database)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Only origin allowed cross-origin access.
    pub cors_origin: HeaderValue,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone)]
pub struct NpsSettings {
    pub base_url: String,
    pub api_key: String,
}

impl fmt::Debug for NpsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NpsSettings")
            .field("base_url", &self.base_url)
            .field("api_key_set", &!self.api_key.is_empty())
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub nps: NpsSettings,
}

//! Load settings from an optional JSON file, then apply environment overrides.

use crate::config::types::*;
use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::path::Path;

/// Default config file name, read when `CONFIG_PATH` is unset and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Load settings from the process environment (after `.env`) and the config file.
pub async fn load() -> Result<Settings, ConfigError> {
    let file = match std::env::var("CONFIG_PATH") {
        Ok(path) => read_file_config(Path::new(&path)).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            read_file_config(Path::new(DEFAULT_CONFIG_FILE)).await?
        }
        Err(_) => FileConfig::default(),
    };
    resolve(file, |key| std::env::var(key).ok())
}

pub async fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}

/// Merge file config with overrides from `env`. Empty env values count as unset.
pub fn resolve<F>(file: FileConfig, env: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let database = match var("DATABASE_URL") {
        Some(url) => DatabaseSettings::Url(url),
        None => {
            let host = var("RDS_HOST").or(file.rds_host).ok_or(ConfigError::Missing("RDS_HOST"))?;
            let database = var("RDS_DB").or(file.rds_db).ok_or(ConfigError::Missing("RDS_DB"))?;
            let port = match var("RDS_PORT") {
                Some(p) => parse_port("RDS_PORT", &p)?,
                None => file.rds_port.unwrap_or(DEFAULT_DB_PORT),
            };
            DatabaseSettings::Parts {
                host,
                port,
                user: var("RDS_USER").or(file.rds_user),
                password: var("RDS_PASSWORD").or(file.rds_password),
                database,
            }
        }
    };

    let port = match var("PORT") {
        Some(p) => parse_port("PORT", &p)?,
        None => file.server_port.unwrap_or(DEFAULT_SERVER_PORT),
    };
    let origin = var("CORS_ORIGIN")
        .or(file.cors_origin)
        .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
    let cors_origin = HeaderValue::from_str(&origin).map_err(|e| ConfigError::Invalid {
        key: "CORS_ORIGIN",
        reason: e.to_string(),
    })?;
    let server = ServerSettings {
        host: var("SERVER_HOST")
            .or(file.server_host)
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
        port,
        cors_origin,
    };

    let nps = NpsSettings {
        base_url: var("NPS_BASE_URL")
            .or(file.nps_base_url)
            .unwrap_or_else(|| DEFAULT_NPS_BASE_URL.to_string()),
        api_key: var("NPS_API_KEY").or(file.nps_api_key).unwrap_or_default(),
    };

    Ok(Settings { database, server, nps })
}

fn parse_port(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::Invalid {
        key,
        reason: format!("'{}': {}", value, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    fn file_with_db() -> FileConfig {
        FileConfig {
            rds_host: Some("db.internal".into()),
            rds_user: Some("parks".into()),
            rds_password: Some("secret".into()),
            rds_db: Some("national_parks".into()),
            ..FileConfig::default()
        }
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = resolve(file_with_db(), env_of(&[])).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.socket_addr(), "0.0.0.0:8080");
        assert_eq!(settings.server.cors_origin, "http://localhost:3000");
        assert_eq!(settings.nps.base_url, DEFAULT_NPS_BASE_URL);
        assert!(settings.nps.api_key.is_empty());
        match settings.database {
            DatabaseSettings::Parts { host, port, database, .. } => {
                assert_eq!(host, "db.internal");
                assert_eq!(port, 3306);
                assert_eq!(database, "national_parks");
            }
            other => panic!("expected parts, got {:?}", other),
        }
    }

    #[test]
    fn env_overrides_file() {
        let env = env_of(&[("PORT", "9090"), ("RDS_HOST", "other-host"), ("NPS_API_KEY", "k")]);
        let settings = resolve(file_with_db(), env).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.nps.api_key, "k");
        match settings.database {
            DatabaseSettings::Parts { host, .. } => assert_eq!(host, "other-host"),
            other => panic!("expected parts, got {:?}", other),
        }
    }

    #[test]
    fn database_url_wins_over_parts() {
        let env = env_of(&[("DATABASE_URL", "mysql://u:p@localhost:3306/parks")]);
        let settings = resolve(FileConfig::default(), env).unwrap();
        assert!(matches!(settings.database, DatabaseSettings::Url(_)));
        assert!(settings.database.connect_options().is_ok());
    }

    #[test]
    fn missing_database_is_an_error() {
        let err = resolve(FileConfig::default(), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("RDS_HOST")));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = resolve(file_with_db(), env_of(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn empty_env_value_counts_as_unset() {
        let settings = resolve(file_with_db(), env_of(&[("PORT", "  ")])).unwrap();
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let mut file = file_with_db();
        file.nps_api_key = Some("XyzSecretKey".into());
        let settings = resolve(file, env_of(&[])).unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("secret"));
        assert!(!printed.contains("XyzSecretKey"));
    }

    #[test]
    fn file_config_parses_rds_keys() {
        let file: FileConfig = serde_json::from_str(
            r#"{"rds_host":"h","rds_user":"u","rds_password":"p","rds_port":3307,"rds_db":"d","server_host":"localhost"}"#,
        )
        .unwrap();
        assert_eq!(file.rds_port, Some(3307));
        assert_eq!(file.server_host.as_deref(), Some("localhost"));
    }

    #[tokio::test]
    async fn unreadable_file_is_a_load_error() {
        let err = read_file_config(Path::new("/nonexistent/parks-config.json")).await.err();
        assert!(matches!(err, Some(ConfigError::Load(_))));
    }
}

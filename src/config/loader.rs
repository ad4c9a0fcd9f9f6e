//! Load settings from environment variables (or any key lookup, for tests).

use crate::config::types::{DatabaseSettings, ServerSettings, Settings};
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

/// Load settings from the process environment. Call `dotenvy::dotenv()` first to honour `.env`.
pub fn from_env() -> Result<Settings, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build settings from a key lookup. Unset or blank keys fall back to defaults.
pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let server_defaults = ServerSettings::default();
    let server = ServerSettings {
        host: get("HOST").unwrap_or(server_defaults.host),
        port: parse_or(&get, "PORT", server_defaults.port)?,
        request_timeout_secs: parse_or(&get, "REQUEST_TIMEOUT_SECS", server_defaults.request_timeout_secs)?,
        max_body_bytes: parse_or(&get, "MAX_BODY_BYTES", server_defaults.max_body_bytes)?,
        cors_origins: get("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(server_defaults.cors_origins),
    };

    let db_defaults = DatabaseSettings::default();
    let database = DatabaseSettings {
        url: get("DATABASE_URL"),
        host: get("DB_HOST").unwrap_or(db_defaults.host),
        port: parse_or(&get, "DB_PORT", db_defaults.port)?,
        user: get("DB_USER").unwrap_or(db_defaults.user),
        password: get("DB_PASSWORD").unwrap_or(db_defaults.password),
        name: get("DB_NAME").unwrap_or(db_defaults.name),
        max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", db_defaults.max_connections)?,
        acquire_timeout_secs: parse_or(&get, "DB_ACQUIRE_TIMEOUT_SECS", db_defaults.acquire_timeout_secs)?,
    };

    let settings = Settings { server, database };
    validate(&settings)?;
    Ok(settings)
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

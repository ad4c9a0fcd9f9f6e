//! Settings validation: values that parse but cannot work.

use crate::config::Settings;
use crate::error::ConfigError;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.server.port == 0 {
        return Err(ConfigError::Validation("PORT must be greater than 0".into()));
    }
    if settings.server.request_timeout_secs == 0 {
        return Err(ConfigError::Validation("REQUEST_TIMEOUT_SECS must be greater than 0".into()));
    }
    if settings.server.max_body_bytes == 0 {
        return Err(ConfigError::Validation("MAX_BODY_BYTES must be greater than 0".into()));
    }
    if settings.server.cors_origins.is_empty() {
        return Err(ConfigError::Validation("CORS_ORIGINS must list at least one origin or '*'".into()));
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::Validation("DB_MAX_CONNECTIONS must be greater than 0".into()));
    }
    if settings.database.url.is_none() && settings.database.name.is_empty() {
        return Err(ConfigError::Validation("DB_NAME or DATABASE_URL is required".into()));
    }
    Ok(())
}

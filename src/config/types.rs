//! Process settings: HTTP listener and PostgreSQL connection.

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
    /// `*` allows any origin (mirrored back so credentials stay allowed).
    pub cors_origins: Vec<String>,
}

impl ServerSettings {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "0.0.0.0".into(),
            port: 8000,
            request_timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
            cors_origins: vec!["*".into()],
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    /// Full connection string; when set it wins over the individual fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseSettings {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            url: None,
            host: "localhost".into(),
            port: 5432,
            user: "crmuser".into(),
            password: "crmsecret".into(),
            name: "crm".into(),
            max_connections: 5,
            acquire_timeout_secs: 5,
        }
    }
}

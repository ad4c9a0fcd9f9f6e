//! CRM API: accounts, contacts, emails, calls and call transcripts over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{from_env, DatabaseSettings, ServerSettings, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use models::{Account, Call, CallTranscript, Contact, Email, Resource};
pub use routes::app;
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, connect_options, drop_database, ensure_database_exists, Store};

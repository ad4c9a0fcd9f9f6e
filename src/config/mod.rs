//! Process configuration from environment variables.

mod loader;
mod types;
mod validator;

pub use loader::{from_env, from_lookup};
pub use types::{DatabaseSettings, ServerSettings, Settings};
pub use validator::validate;

//! Data access: pooled PostgreSQL connections, parameterized statements, typed rows.
//! Every operation acquires one connection for its own duration; dropping the guard returns it
//! to the pool whether the statement succeeded or failed. Statements auto-commit individually.

use crate::config::DatabaseSettings;
use crate::error::{AppError, ConfigError};
use crate::sql::QueryBuf;
use regex::Regex;
use sqlx::postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{ConnectOptions, FromRow, PgPool, Postgres};
use std::str::FromStr;
use std::sync::OnceLock;

/// Handle to the relational store. Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: PgPool,
}

fn bind_all<'q>(q: &'q QueryBuf) -> Query<'q, Postgres, PgArguments> {
    q.params.iter().fold(sqlx::query(&q.sql), |query, p| query.bind(p.clone()))
}

fn bind_all_as<'q, T>(q: &'q QueryBuf) -> QueryAs<'q, Postgres, T, PgArguments>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    q.params
        .iter()
        .fold(sqlx::query_as::<_, T>(&q.sql), |query, p| query.bind(p.clone()))
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Store { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run a read returning zero or more rows. An empty result is not an error.
    pub async fn query<T>(&self, q: &QueryBuf) -> Result<Vec<T>, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut conn = self.pool.acquire().await?;
        let rows = bind_all_as::<T>(q).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// Run a read returning at most one row; `None` when nothing matches.
    pub async fn query_one<T>(&self, q: &QueryBuf) -> Result<Option<T>, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query_one");
        let mut conn = self.pool.acquire().await?;
        let row = bind_all_as::<T>(q).fetch_optional(&mut *conn).await?;
        Ok(row)
    }

    /// Run an INSERT/UPDATE ... RETURNING. `None` means no row was affected.
    pub async fn execute_returning<T>(&self, q: &QueryBuf) -> Result<Option<T>, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute_returning");
        let mut conn = self.pool.acquire().await?;
        let row = bind_all_as::<T>(q).fetch_optional(&mut *conn).await?;
        Ok(row)
    }

    /// Run a statement without result rows (DELETE). Returns the affected row count.
    pub async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut conn = self.pool.acquire().await?;
        let done = bind_all(q).execute(&mut *conn).await?;
        Ok(done.rows_affected())
    }

    /// Liveness probe used by the readiness route.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}

/// Connection options from settings: `DATABASE_URL` when present, otherwise the discrete fields.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, AppError> {
    match &settings.url {
        Some(url) => PgConnectOptions::from_str(url)
            .map_err(|e| {
                AppError::Config(ConfigError::Invalid {
                    key: "DATABASE_URL",
                    value: "<redacted>".into(),
                    reason: e.to_string(),
                })
            }),
        None => Ok(PgConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.name)),
    }
}

/// Open the bounded pool the service runs on.
pub async fn connect(settings: &DatabaseSettings) -> Result<Store, AppError> {
    let options = connect_options(settings)?;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect_with(options)
        .await?;
    Ok(Store::new(pool))
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern compiles"))
}

/// Database names end up in DDL, which cannot take bind parameters.
pub fn validate_database_name(name: &str) -> Result<(), AppError> {
    if name.len() <= 63 && identifier_pattern().is_match(name) {
        Ok(())
    } else {
        Err(AppError::Config(ConfigError::Invalid {
            key: "DB_NAME",
            value: name.to_string(),
            reason: "expected an identifier of at most 63 characters".into(),
        }))
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Split options into (maintenance connection, target database name).
fn admin_target(options: &PgConnectOptions) -> Result<(PgConnectOptions, String), AppError> {
    let db_name = options
        .get_database()
        .map(String::from)
        .ok_or_else(|| {
            AppError::Config(ConfigError::Validation(
                "database name missing from connection settings".into(),
            ))
        })?;
    validate_database_name(&db_name)?;
    Ok((options.clone().database("postgres"), db_name))
}

/// Ensure the target database exists; create it if not. Connects to the default `postgres`
/// database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let (admin, db_name) = admin_target(options)?;
    if db_name == "postgres" {
        return Ok(());
    }
    let mut conn = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Drop the target database if present. Close every pool on it first.
pub async fn drop_database(options: &PgConnectOptions) -> Result<(), AppError> {
    let (admin, db_name) = admin_target(options)?;
    if db_name == "postgres" {
        return Err(AppError::Config(ConfigError::Validation(
            "refusing to drop the maintenance database".into(),
        )));
    }
    let mut conn = admin.connect().await?;
    sqlx::query(&format!("DROP DATABASE IF EXISTS {}", quote_ident(&db_name)))
        .execute(&mut conn)
        .await?;
    Ok(())
}

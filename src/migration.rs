//! Apply the CRM schema to the database: one CREATE TABLE per entity, parents first, with
//! ON DELETE CASCADE foreign keys so removing a parent removes its whole subtree.

use crate::error::AppError;
use crate::schema::{Table, TABLES};
use sqlx::PgPool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// DDL for one table. Idempotent (IF NOT EXISTS).
pub fn create_table_sql(table: &Table) -> String {
    let mut col_defs: Vec<String> = vec![format!("{} SERIAL PRIMARY KEY", quote("id"))];
    for c in table.columns {
        let mut def = format!("{} {}", quote(c.name), c.sql_type.ddl());
        if !c.nullable {
            def.push_str(" NOT NULL");
        }
        if table.unique.contains(&c.name) {
            def.push_str(" UNIQUE");
        }
        if let Some(fk) = table.parent.filter(|fk| fk.column == c.name) {
            def.push_str(&format!(
                " REFERENCES {} ({}) ON DELETE CASCADE",
                quote(fk.references),
                quote("id")
            ));
        }
        col_defs.push(def);
    }
    col_defs.push(format!(
        "{} TIMESTAMPTZ NOT NULL DEFAULT NOW()",
        quote(table.timestamp_column)
    ));
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(table.name),
        col_defs.join(",\n  ")
    )
}

/// Create every table in dependency order.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for table in TABLES {
        let sql = create_table_sql(table);
        tracing::debug!(table = table.name, "applying migration");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(tables = TABLES.len(), "schema ready");
    Ok(())
}

//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a static table definition.

use crate::schema::{Column, Table};
use crate::sql::PgBindValue;

/// Quote identifier for PostgreSQL (safe: only from schema definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn placeholder(n: u32, column: Option<&Column>) -> String {
    match column.and_then(|c| c.sql_type.cast()) {
        Some(cast) => format!("${}::{}", n, cast),
        None => format!("${}", n),
    }
}

fn select_column_list(table: &Table) -> String {
    table
        .all_column_names()
        .into_iter()
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Newest first; id breaks ties between rows inserted within the same clock tick.
fn order_clause(table: &Table) -> String {
    format!(
        " ORDER BY {} DESC, {} DESC",
        quoted(table.timestamp_column),
        quoted("id")
    )
}

/// SELECT every row, newest first.
pub fn select_list(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {}{}",
        select_column_list(table),
        quoted(table.name),
        order_clause(table)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &Table, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(table),
        quoted(table.name),
        quoted("id"),
        n
    );
    q
}

/// SELECT rows whose `column` equals `value`, newest first. Used for parent-key lookups.
pub fn select_by_column(table: &Table, column: &str, value: PgBindValue) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(value);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}{}",
        select_column_list(table),
        quoted(table.name),
        quoted(column),
        placeholder(n, table.column(column)),
        order_clause(table)
    );
    q
}

/// INSERT all writable columns; `values` follow `table.columns` order. RETURNING the full row.
pub fn insert(table: &Table, values: Vec<PgBindValue>) -> QueryBuf {
    debug_assert_eq!(values.len(), table.columns.len());
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(table.columns.len());
    let mut placeholders = Vec::with_capacity(table.columns.len());
    for (c, v) in table.columns.iter().zip(values) {
        let n = q.push_param(v);
        cols.push(quoted(c.name));
        placeholders.push(placeholder(n, Some(c)));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(table)
    );
    q
}

/// UPDATE by id replacing every writable column. Returns no row when the id does not exist.
pub fn update(table: &Table, id: i32, values: Vec<PgBindValue>) -> QueryBuf {
    debug_assert_eq!(values.len(), table.columns.len());
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(table.columns.len());
    for (c, v) in table.columns.iter().zip(values) {
        let n = q.push_param(v);
        sets.push(format!("{} = {}", quoted(c.name), placeholder(n, Some(c))));
    }
    let id_param = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted("id"),
        id_param,
        select_column_list(table)
    );
    q
}

/// DELETE by id. Dependent rows go with it through the foreign-key cascade.
pub fn delete(table: &Table, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(table.name), quoted("id"), n);
    q
}

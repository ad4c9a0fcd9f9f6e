//! Generic CRUD execution against PostgreSQL, one statement per operation.

use crate::error::AppError;
use crate::models::{Resource, Writable};
use crate::sql::{delete, insert, select_by_column, select_by_id, select_list, update, PgBindValue};
use crate::store::Store;
use std::marker::PhantomData;

/// CRUD for one resource type. Stateless; the store is passed per call.
pub struct CrudService<R>(PhantomData<R>);

impl<R: Resource> CrudService<R> {
    /// All rows, newest first.
    pub async fn list(store: &Store) -> Result<Vec<R>, AppError> {
        store.query(&select_list(R::TABLE)).await
    }

    /// One row by id, `NotFound` when absent.
    pub async fn read(store: &Store, id: i32) -> Result<R, AppError> {
        store
            .query_one(&select_by_id(R::TABLE, id))
            .await?
            .ok_or(AppError::NotFound(R::LABEL))
    }

    /// Insert one row. Constraint failures (missing parent, duplicate unique value) surface
    /// from the store unchanged.
    pub async fn create(store: &Store, body: &R::Input) -> Result<R, AppError> {
        let q = insert(R::TABLE, body.values());
        let row = store
            .execute_returning(&q)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::debug!(table = R::TABLE.name, "created");
        Ok(row)
    }

    /// Replace every writable column of the row with `id`. The UPDATE returning no row is the
    /// not-found signal; there is no separate existence check.
    pub async fn update(store: &Store, id: i32, body: &R::Input) -> Result<R, AppError> {
        let q = update(R::TABLE, id, body.values());
        store
            .execute_returning(&q)
            .await?
            .ok_or(AppError::NotFound(R::LABEL))
    }

    /// Delete by id; dependents are removed by the foreign-key cascade.
    pub async fn delete(store: &Store, id: i32) -> Result<(), AppError> {
        let affected = store.execute(&delete(R::TABLE, id)).await?;
        if affected == 0 {
            return Err(AppError::NotFound(R::LABEL));
        }
        tracing::debug!(table = R::TABLE.name, id, "deleted");
        Ok(())
    }

    /// Rows whose `column` equals `value`, newest first. The parent itself is not looked up, so
    /// an unknown parent id yields an empty list.
    pub async fn list_by(store: &Store, column: &str, value: i32) -> Result<Vec<R>, AppError> {
        store
            .query(&select_by_column(R::TABLE, column, PgBindValue::Int(value)))
            .await
    }

    /// First row whose `column` equals `value` (newest wins), `NotFound` when none.
    pub async fn find_by(store: &Store, column: &str, value: i32) -> Result<R, AppError> {
        store
            .query_one(&select_by_column(R::TABLE, column, PgBindValue::Int(value)))
            .await?
            .ok_or(AppError::NotFound(R::LABEL))
    }
}

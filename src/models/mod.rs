//! Entity contracts: read shapes (rows), create and update shapes (request bodies).
//! Update shapes carry the same fields as create shapes; an update replaces every writable column.

mod account;
mod call;
mod contact;
mod email;
mod transcript;

pub use account::{Account, AccountCreate, AccountUpdate};
pub use call::{Call, CallCreate, CallUpdate};
pub use contact::{Contact, ContactCreate, ContactUpdate};
pub use email::{Email, EmailCreate, EmailUpdate};
pub use transcript::{CallTranscript, CallTranscriptCreate, CallTranscriptUpdate};

use crate::schema::Table;
use crate::service::Validate;
use crate::sql::PgBindValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A write payload that can be bound to its table's writable columns.
pub trait Writable: Validate + DeserializeOwned + Send + Sync + 'static {
    /// One value per `Table::columns` entry, same order.
    fn values(&self) -> Vec<PgBindValue>;
}

/// A stored entity: its read shape, table and the payload accepted for create/update.
pub trait Resource: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    type Input: Writable;

    const TABLE: &'static Table;
    /// Human label used in messages ("Account not found").
    const LABEL: &'static str;
    /// URL collection segment ("accounts", "call-transcripts").
    const PATH: &'static str;
}

#[cfg(test)]
pub(crate) fn assert_binds_every_column<R: Resource>(input: &R::Input) {
    assert_eq!(input.values().len(), R::TABLE.columns.len(), "{}", R::TABLE.name);
}

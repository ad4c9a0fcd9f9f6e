use crate::models::{Resource, Writable};
use crate::schema::{Table, CONTACTS};
use crate::service::Validate;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i32,
    pub account_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `email` is unique across all contacts; the store rejects duplicates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactCreate {
    pub account_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

pub type ContactUpdate = ContactCreate;

impl Validate for ContactCreate {}

impl Writable for ContactCreate {
    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.account_id.into(),
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
            self.email.as_str().into(),
            self.phone.as_deref().into(),
            self.title.as_deref().into(),
            self.role.as_deref().into(),
        ]
    }
}

impl Resource for Contact {
    type Input = ContactCreate;

    const TABLE: &'static Table = &CONTACTS;
    const LABEL: &'static str = "Contact";
    const PATH: &'static str = "contacts";
}

use crate::models::{Resource, Writable};
use crate::schema::{Table, EMAILS};
use crate::service::Validate;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Email {
    pub id: i32,
    pub contact_id: i32,
    pub subject: String,
    pub body: Option<String>,
    pub sent_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailCreate {
    pub contact_id: i32,
    pub subject: String,
    #[serde(default)]
    pub body: Option<String>,
}

pub type EmailUpdate = EmailCreate;

impl Validate for EmailCreate {}

impl Writable for EmailCreate {
    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.contact_id.into(),
            self.subject.as_str().into(),
            self.body.as_deref().into(),
        ]
    }
}

impl Resource for Email {
    type Input = EmailCreate;

    const TABLE: &'static Table = &EMAILS;
    const LABEL: &'static str = "Email";
    const PATH: &'static str = "emails";
}

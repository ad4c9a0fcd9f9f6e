use crate::models::{Resource, Writable};
use crate::schema::{Table, CALLS};
use crate::service::Validate;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Call {
    pub id: i32,
    pub contact_id: i32,
    pub call_type: String,
    /// Minutes.
    pub duration: Option<i32>,
    pub outcome: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallCreate {
    pub contact_id: i32,
    pub call_type: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub outcome: Option<String>,
}

pub type CallUpdate = CallCreate;

impl Validate for CallCreate {}

impl Writable for CallCreate {
    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.contact_id.into(),
            self.call_type.as_str().into(),
            self.duration.into(),
            self.outcome.as_deref().into(),
        ]
    }
}

impl Resource for Call {
    type Input = CallCreate;

    const TABLE: &'static Table = &CALLS;
    const LABEL: &'static str = "Call";
    const PATH: &'static str = "calls";
}

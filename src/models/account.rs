use crate::error::AppError;
use crate::models::{Resource, Writable};
use crate::schema::{Table, ACCOUNTS};
use crate::service::{require_non_empty, Validate};
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub plan: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountCreate {
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

pub type AccountUpdate = AccountCreate;

impl Validate for AccountCreate {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)
    }
}

impl Writable for AccountCreate {
    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.name.as_str().into(),
            self.industry.as_deref().into(),
            self.plan.as_deref().into(),
            self.status.as_deref().into(),
        ]
    }
}

impl Resource for Account {
    type Input = AccountCreate;

    const TABLE: &'static Table = &ACCOUNTS;
    const LABEL: &'static str = "Account";
    const PATH: &'static str = "accounts";
}

use crate::models::{Resource, Writable};
use crate::schema::{Table, CALL_TRANSCRIPTS};
use crate::service::Validate;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CallTranscript {
    pub id: i32,
    pub call_id: i32,
    pub transcript: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallTranscriptCreate {
    pub call_id: i32,
    pub transcript: String,
}

pub type CallTranscriptUpdate = CallTranscriptCreate;

impl Validate for CallTranscriptCreate {}

impl Writable for CallTranscriptCreate {
    fn values(&self) -> Vec<PgBindValue> {
        vec![self.call_id.into(), self.transcript.as_str().into()]
    }
}

impl Resource for CallTranscript {
    type Input = CallTranscriptCreate;

    const TABLE: &'static Table = &CALL_TRANSCRIPTS;
    const LABEL: &'static str = "Call transcript";
    const PATH: &'static str = "call-transcripts";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assert_binds_every_column;
    use serde_json::json;

    #[test]
    fn transcript_text_is_required() {
        assert!(serde_json::from_value::<CallTranscriptCreate>(json!({ "call_id": 1 })).is_err());
        let t: CallTranscriptCreate =
            serde_json::from_value(json!({ "call_id": 1, "transcript": "hello" })).unwrap();
        assert_binds_every_column::<CallTranscript>(&t);
    }
}

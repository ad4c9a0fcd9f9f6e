//! Bind values for CRM statements.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value that can be bound to a PostgreSQL query. Each variant reports its own Postgres type so
/// mixed-type parameter lists bind correctly.
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Null,
    Int(i32),
    Text(String),
}

impl From<i32> for PgBindValue {
    fn from(n: i32) -> Self {
        PgBindValue::Int(n)
    }
}

impl From<Option<i32>> for PgBindValue {
    fn from(n: Option<i32>) -> Self {
        n.map_or(PgBindValue::Null, PgBindValue::Int)
    }
}

impl From<&str> for PgBindValue {
    fn from(s: &str) -> Self {
        PgBindValue::Text(s.to_string())
    }
}

impl From<Option<&str>> for PgBindValue {
    fn from(s: Option<&str>) -> Self {
        s.map_or(PgBindValue::Null, PgBindValue::from)
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            PgBindValue::Null => Ok(IsNull::Yes),
            PgBindValue::Int(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf),
            PgBindValue::Text(s) => <&str as Encode<Postgres>>::encode_by_ref(&s.as_str(), buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        match self {
            PgBindValue::Int(_) => Some(<i32 as Type<Postgres>>::type_info()),
            PgBindValue::Null | PgBindValue::Text(_) => None,
        }
    }
}

impl Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        <str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <str as Type<Postgres>>::compatible(ty) || <i32 as Type<Postgres>>::compatible(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_values_map_to_null() {
        assert_eq!(PgBindValue::from(None::<i32>), PgBindValue::Null);
        assert_eq!(PgBindValue::from(None::<&str>), PgBindValue::Null);
        assert_eq!(PgBindValue::from(Some(30)), PgBindValue::Int(30));
        assert_eq!(PgBindValue::from(Some("Acme")), PgBindValue::Text("Acme".into()));
    }

    #[test]
    fn integers_report_int4() {
        let ty = PgBindValue::Int(1).produces().expect("int type");
        assert!(<i32 as Type<Postgres>>::compatible(&ty));
        assert!(PgBindValue::Text("x".into()).produces().is_none());
    }
}

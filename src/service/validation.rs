//! Structural validation for write payloads, run after JSON typing and before any datastore access.

use crate::error::AppError;

/// Checks serde cannot express. The default accepts anything that deserialized.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Required text must carry at least one non-whitespace character.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

//! Cross-entity lookups filtered by a parent key. Parents are not checked for existence:
//! an unknown parent id gives an empty list, the same as a parent with no children.

use crate::error::AppError;
use crate::extractors::EntityId;
use crate::models::{Call, CallTranscript, Contact, Email};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /accounts/:id/contacts
pub async fn account_contacts(
    State(state): State<AppState>,
    EntityId(account_id): EntityId,
) -> Result<Json<Vec<Contact>>, AppError> {
    let rows = CrudService::<Contact>::list_by(&state.store, "account_id", account_id).await?;
    Ok(Json(rows))
}

/// GET /contacts/:id/emails
pub async fn contact_emails(
    State(state): State<AppState>,
    EntityId(contact_id): EntityId,
) -> Result<Json<Vec<Email>>, AppError> {
    let rows = CrudService::<Email>::list_by(&state.store, "contact_id", contact_id).await?;
    Ok(Json(rows))
}

/// GET /contacts/:id/calls
pub async fn contact_calls(
    State(state): State<AppState>,
    EntityId(contact_id): EntityId,
) -> Result<Json<Vec<Call>>, AppError> {
    let rows = CrudService::<Call>::list_by(&state.store, "contact_id", contact_id).await?;
    Ok(Json(rows))
}

/// GET /calls/:id/transcript. A call may have no transcript: 404 "Call transcript not found".
pub async fn call_transcript(
    State(state): State<AppState>,
    EntityId(call_id): EntityId,
) -> Result<Json<CallTranscript>, AppError> {
    let row = CrudService::<CallTranscript>::find_by(&state.store, "call_id", call_id).await?;
    Ok(Json(row))
}

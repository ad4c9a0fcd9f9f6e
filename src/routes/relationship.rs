//! Relationship routes: children of a parent resource.

use crate::handlers::{account_contacts, call_transcript, contact_calls, contact_emails};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn relationship_routes(state: AppState) -> Router {
    Router::new()
        .route("/accounts/:id/contacts", get(account_contacts))
        .route("/contacts/:id/emails", get(contact_emails))
        .route("/contacts/:id/calls", get(contact_calls))
        .route("/calls/:id/transcript", get(call_transcript))
        .with_state(state)
}

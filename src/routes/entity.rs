//! Entity CRUD routes. Each resource gets its collection (with and without trailing slash) and
//! item paths; handlers are the generic set in `handlers::entity`.

use crate::handlers::entity::{create, delete, list, read, update};
use crate::models::{Account, Call, CallTranscript, Contact, Email, Resource};
use crate::state::AppState;
use axum::{routing::get, Router};

fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::PATH);
    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&format!("{}/", collection), get(list::<R>).post(create::<R>))
        .route(
            &format!("{}/:id", collection),
            get(read::<R>).put(update::<R>).delete(delete::<R>),
        )
}

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<Account>())
        .merge(resource_routes::<Contact>())
        .merge(resource_routes::<Email>())
        .merge(resource_routes::<Call>())
        .merge(resource_routes::<CallTranscript>())
        .with_state(state)
}

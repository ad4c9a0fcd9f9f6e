//! Entity CRUD handlers: list, read, create, update, delete. One generic set serves all five
//! resources; the route table picks the type.

use crate::error::AppError;
use crate::extractors::{EntityId, ValidJson};
use crate::models::Resource;
use crate::response::Message;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R>>, AppError> {
    let rows = CrudService::<R>::list(&state.store).await?;
    Ok(Json(rows))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<R>, AppError> {
    let row = CrudService::<R>::read(&state.store, id).await?;
    Ok(Json(row))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<R::Input>,
) -> Result<Json<R>, AppError> {
    let row = CrudService::<R>::create(&state.store, &body).await?;
    Ok(Json(row))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(body): ValidJson<R::Input>,
) -> Result<Json<R>, AppError> {
    let row = CrudService::<R>::update(&state.store, id, &body).await?;
    Ok(Json(row))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Message>, AppError> {
    CrudService::<R>::delete(&state.store, id).await?;
    Ok(Json(Message::deleted(R::LABEL)))
}

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::AppState;
use crate::dto::{ClientView, NewClientDto};
use crate::extract::{AppJson, AppPath};
use crate::ApiError;
use registry::ClientDraft;

pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewClientDto>,
) -> Result<StatusCode, ApiError> {
    state.clients.create(payload.owner_id, payload.client).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update(
    AppPath(id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ClientDraft>,
) -> Result<StatusCode, ApiError> {
    state.clients.update(id, payload).await?;
    Ok(StatusCode::ACCEPTED)
}

pub async fn list_by_owner(
    AppPath(owner_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientView>>, ApiError> {
    let clients = state.clients.list_by_owner(owner_id).await?;
    Ok(Json(clients.into_iter().map(ClientView::from).collect()))
}

pub async fn get(
    AppPath(id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ClientView>, ApiError> {
    Ok(Json(state.clients.get_by_id(id).await?.into()))
}

pub async fn get_by_cpf(
    AppPath((owner_id, cpf)): AppPath<(Uuid, String)>,
    State(state): State<AppState>,
) -> Result<Json<ClientView>, ApiError> {
    Ok(Json(state.clients.get_by_tax_id(&cpf, owner_id).await?.into()))
}

pub async fn delete(
    AppPath(id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

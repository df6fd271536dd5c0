use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::AppState;
use crate::dto::{NewSupplierDto, SupplierView};
use crate::extract::{AppJson, AppPath};
use crate::ApiError;
use registry::SupplierDraft;

pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewSupplierDto>,
) -> Result<StatusCode, ApiError> {
    state.suppliers.create(payload.owner_id, payload.supplier).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update(
    AppPath(id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<SupplierDraft>,
) -> Result<StatusCode, ApiError> {
    state.suppliers.update(id, payload).await?;
    Ok(StatusCode::ACCEPTED)
}

pub async fn list_by_owner(
    AppPath(owner_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SupplierView>>, ApiError> {
    let suppliers = state.suppliers.list_by_owner(owner_id).await?;
    Ok(Json(suppliers.into_iter().map(SupplierView::from).collect()))
}

pub async fn get(
    AppPath(id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<SupplierView>, ApiError> {
    Ok(Json(state.suppliers.get_by_id(id).await?.into()))
}

pub async fn get_by_cnpj(
    AppPath((owner_id, cnpj)): AppPath<(Uuid, String)>,
    State(state): State<AppState>,
) -> Result<Json<SupplierView>, ApiError> {
    Ok(Json(state.suppliers.get_by_tax_id(&cnpj, owner_id).await?.into()))
}

pub async fn delete(
    AppPath(id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.suppliers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

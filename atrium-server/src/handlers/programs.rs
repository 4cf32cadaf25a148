use axum::{
    extract::{Path, Query as QueryParams, State},
    Json,
};
use serde::Deserialize;

use atrium_core::{normalize, Document, Query, ResourceKind};
use atrium_model::{Page, ProgramCreate, ProgramStatus, ProgramUpdate, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::handlers::to_document;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

async fn list(
    state: &AppState,
    params: &ListParams,
    active_only: bool,
) -> AppResult<Page<Document>> {
    let filter = if active_only {
        Query::new().eq("status", ProgramStatus::ACTIVE)
    } else {
        Query::new()
    };
    let mut page = state
        .repo(ResourceKind::Program)
        .paginate(filter, None, params.page.max(1), params.page_size.clamp(1, 100))
        .await?;
    // Pre-logical-id documents get their id backfilled on the way out.
    page.items.iter_mut().for_each(normalize::backfill_id);
    Ok(page)
}

/// Public listing: active programs only.
pub async fn list_programs(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Page<Document>>> {
    Ok(Json(list(&state, &params, true).await?))
}

pub async fn get_program(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
) -> AppResult<Json<Document>> {
    state
        .repo(ResourceKind::Program)
        .get(&program_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Program not found"))
}

/// Admin listing: inactive programs included.
pub async fn admin_list_programs(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Page<Document>>> {
    Ok(Json(list(&state, &params, false).await?))
}

pub async fn create_program(
    State(state): State<AppState>,
    Json(payload): Json<ProgramCreate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    let created = state
        .repo(ResourceKind::Program)
        .create(to_document(&payload)?)
        .await?;
    Ok(Json(created))
}

pub async fn update_program(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
    Json(payload): Json<ProgramUpdate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    state
        .repo(ResourceKind::Program)
        .update(&program_id, to_document(&payload)?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Program not found"))
}

pub async fn delete_program(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state.repo(ResourceKind::Program).delete(&program_id).await? {
        Ok(Json(SuccessResponse::new("Program deleted successfully")))
    } else {
        Err(AppError::not_found("Program not found"))
    }
}

use axum::{
    extract::{Path, Query as QueryParams, State},
    Json,
};
use serde::Deserialize;

use atrium_core::{Document, Query, ResourceKind};
use atrium_model::{StaticContentCreate, StaticContentUpdate, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::handlers::to_document;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    section: Option<String>,
}

pub async fn list_static_content(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Vec<Document>>> {
    let mut filter = Query::new();
    if let Some(section) = &params.section {
        filter = filter.eq("section", section.as_str());
    }
    let content = state
        .repo(ResourceKind::StaticContent)
        .list_all(filter)
        .await?;
    Ok(Json(content))
}

pub async fn get_static_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Document>> {
    state
        .repo(ResourceKind::StaticContent)
        .get(&key)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Content not found"))
}

pub async fn create_static_content(
    State(state): State<AppState>,
    Json(payload): Json<StaticContentCreate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    let created = state
        .repo(ResourceKind::StaticContent)
        .create(to_document(&payload)?)
        .await?;
    Ok(Json(created))
}

pub async fn update_static_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<StaticContentUpdate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    state
        .repo(ResourceKind::StaticContent)
        .update(&key, to_document(&payload)?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Content not found"))
}

pub async fn delete_static_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state
        .repo(ResourceKind::StaticContent)
        .delete(&key)
        .await?
    {
        Ok(Json(SuccessResponse::new("Content deleted successfully")))
    } else {
        Err(AppError::not_found("Content not found"))
    }
}

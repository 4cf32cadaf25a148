use axum::{
    extract::{Path, Query as QueryParams, State},
    Json,
};
use serde::Deserialize;

use atrium_core::{Document, Query, ResourceKind};
use atrium_model::{PartnershipCreate, PartnershipUpdate, Page, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::handlers::to_document;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Partnership type filter; `type` on the wire.
    #[serde(rename = "type")]
    kind: Option<String>,
    country: Option<String>,
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

pub async fn list_partnerships(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Page<Document>>> {
    let mut filter = Query::new();
    if let Some(kind) = &params.kind {
        filter = filter.eq("type", kind.as_str());
    }
    if let Some(country) = &params.country {
        filter = filter.eq("country", country.as_str());
    }
    let page = state
        .repo(ResourceKind::Partnership)
        .paginate(filter, None, params.page.max(1), params.page_size.clamp(1, 100))
        .await?;
    Ok(Json(page))
}

pub async fn get_partnership(
    State(state): State<AppState>,
    Path(partnership_id): Path<String>,
) -> AppResult<Json<Document>> {
    state
        .repo(ResourceKind::Partnership)
        .get(&partnership_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Partnership not found"))
}

pub async fn create_partnership(
    State(state): State<AppState>,
    Json(payload): Json<PartnershipCreate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    let created = state
        .repo(ResourceKind::Partnership)
        .create(to_document(&payload)?)
        .await?;
    Ok(Json(created))
}

pub async fn update_partnership(
    State(state): State<AppState>,
    Path(partnership_id): Path<String>,
    Json(payload): Json<PartnershipUpdate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    state
        .repo(ResourceKind::Partnership)
        .update(&partnership_id, to_document(&payload)?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Partnership not found"))
}

pub async fn delete_partnership(
    State(state): State<AppState>,
    Path(partnership_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state
        .repo(ResourceKind::Partnership)
        .delete(&partnership_id)
        .await?
    {
        Ok(Json(SuccessResponse::new(
            "Partnership deleted successfully",
        )))
    } else {
        Err(AppError::not_found("Partnership not found"))
    }
}

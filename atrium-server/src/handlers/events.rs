use axum::{
    extract::{Path, Query as QueryParams, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use atrium_core::{Document, Query, ResourceKind};
use atrium_model::{EventCreate, EventUpdate, Page, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::handlers::to_document;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
    #[serde(default)]
    upcoming_only: bool,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

pub async fn list_events(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Page<Document>>> {
    let mut filter = Query::new();
    if let Some(kind) = &params.kind {
        filter = filter.eq("type", kind.as_str());
    }
    if params.upcoming_only {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        filter = filter.gte("startDate", now);
    }
    let page = state
        .repo(ResourceKind::Event)
        .paginate(filter, None, params.page.max(1), params.page_size.clamp(1, 100))
        .await?;
    Ok(Json(page))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<Document>> {
    state
        .repo(ResourceKind::Event)
        .get(&event_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Event not found"))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventCreate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    let created = state
        .repo(ResourceKind::Event)
        .create(to_document(&payload)?)
        .await?;
    Ok(Json(created))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(payload): Json<EventUpdate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    state
        .repo(ResourceKind::Event)
        .update(&event_id, to_document(&payload)?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Event not found"))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state.repo(ResourceKind::Event).delete(&event_id).await? {
        Ok(Json(SuccessResponse::new("Event deleted successfully")))
    } else {
        Err(AppError::not_found("Event not found"))
    }
}

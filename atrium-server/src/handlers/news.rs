use axum::{
    extract::{Path, Query as QueryParams, State},
    Json,
};
use serde::Deserialize;

use atrium_core::{Document, Query, ResourceKind};
use atrium_model::{NewsCreate, NewsUpdate, Page, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::handlers::to_document;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    category: Option<String>,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
    #[serde(default)]
    featured_only: bool,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

pub async fn list_news(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Page<Document>>> {
    let mut filter = Query::new();
    if let Some(category) = &params.category {
        filter = filter.eq("category", category.as_str());
    }
    if params.featured_only {
        filter = filter.eq("featured", true);
    }
    let page = state
        .repo(ResourceKind::News)
        .paginate(filter, None, params.page.max(1), params.page_size.clamp(1, 50))
        .await?;
    Ok(Json(page))
}

pub async fn get_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> AppResult<Json<Document>> {
    state
        .repo(ResourceKind::News)
        .get(&news_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("News article not found"))
}

pub async fn create_news(
    State(state): State<AppState>,
    Json(payload): Json<NewsCreate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    let created = state
        .repo(ResourceKind::News)
        .create(to_document(&payload)?)
        .await?;
    Ok(Json(created))
}

pub async fn update_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
    Json(payload): Json<NewsUpdate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    state
        .repo(ResourceKind::News)
        .update(&news_id, to_document(&payload)?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("News not found"))
}

pub async fn delete_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state.repo(ResourceKind::News).delete(&news_id).await? {
        Ok(Json(SuccessResponse::new("News deleted successfully")))
    } else {
        Err(AppError::not_found("News not found"))
    }
}

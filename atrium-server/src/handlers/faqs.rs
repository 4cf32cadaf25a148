use axum::{
    extract::{Path, Query as QueryParams, State},
    Json,
};
use serde::Deserialize;

use atrium_core::{Document, Query, ResourceKind};
use atrium_model::{FaqCreate, FaqUpdate, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::handlers::to_document;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    category: Option<String>,
}

/// FAQs are served whole, ordered by their curated `order` field.
pub async fn list_faqs(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Vec<Document>>> {
    let mut filter = Query::new();
    if let Some(category) = &params.category {
        filter = filter.eq("category", category.as_str());
    }
    let faqs = state.repo(ResourceKind::Faq).list_all(filter).await?;
    Ok(Json(faqs))
}

pub async fn create_faq(
    State(state): State<AppState>,
    Json(payload): Json<FaqCreate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    let created = state
        .repo(ResourceKind::Faq)
        .create(to_document(&payload)?)
        .await?;
    Ok(Json(created))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
    Json(payload): Json<FaqUpdate>,
) -> AppResult<Json<Document>> {
    payload.validate()?;
    state
        .repo(ResourceKind::Faq)
        .update(&faq_id, to_document(&payload)?)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("FAQ not found"))
}

pub async fn delete_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state.repo(ResourceKind::Faq).delete(&faq_id).await? {
        Ok(Json(SuccessResponse::new("FAQ deleted successfully")))
    } else {
        Err(AppError::not_found("FAQ not found"))
    }
}

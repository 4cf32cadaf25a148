//! Gallery handlers. Upload and update travel as multipart form data.

use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query as QueryParams, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use atrium_core::{Document, Query, ResourceKind};
use atrium_model::{Page, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::AppState;

const SUBDIR: &str = "gallery";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    category: Option<String>,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    30
}

pub async fn list_gallery(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Page<Document>>> {
    let mut filter = Query::new();
    if let Some(category) = &params.category {
        filter = filter.eq("category", category.as_str());
    }
    let page = state
        .repo(ResourceKind::GalleryImage)
        .paginate(filter, None, params.page.max(1), params.page_size.clamp(1, 100))
        .await?;
    Ok(Json(page))
}

pub async fn get_gallery_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> AppResult<Json<Document>> {
    state
        .repo(ResourceKind::GalleryImage)
        .get(&image_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Image not found"))
}

#[derive(Debug, Default)]
struct GalleryForm {
    file: Option<(String, Option<String>, Bytes)>,
    image_url: Option<String>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    order: Option<i64>,
    is_featured: Option<bool>,
    is_active: Option<bool>,
}

async fn read_form(mut multipart: Multipart) -> AppResult<GalleryForm> {
    let mut form = GalleryForm::default();
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request(format!("malformed multipart body: {e}"))
    })? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "file" {
            let content_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_default();
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(|e| {
                AppError::bad_request(format!("failed to read upload: {e}"))
            })?;
            if !bytes.is_empty() {
                form.file = Some((content_type, file_name, bytes));
            }
            continue;
        }
        let text = field.text().await.map_err(|e| {
            AppError::bad_request(format!("malformed field {name}: {e}"))
        })?;
        match name.as_str() {
            "image_url" => form.image_url = Some(text),
            "title" => form.title = Some(text),
            "description" => form.description = Some(text),
            "category" => form.category = Some(text),
            "order" => {
                form.order = Some(text.parse::<i64>().map_err(|_| {
                    AppError::bad_request("order must be an integer")
                })?)
            }
            "is_featured" => form.is_featured = Some(parse_bool(&text)?),
            "is_active" => form.is_active = Some(parse_bool(&text)?),
            _ => {}
        }
    }
    Ok(form)
}

fn parse_bool(raw: &str) -> AppResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::bad_request("expected a boolean field")),
    }
}

pub async fn upload_gallery_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<Document>> {
    let form = read_form(multipart).await?;

    let (content_type, file_name, bytes) = form
        .file
        .ok_or_else(|| AppError::bad_request("file is required"))?;
    let title = form
        .title
        .ok_or_else(|| AppError::bad_request("title is required"))?;
    let category = form
        .category
        .ok_or_else(|| AppError::bad_request("category is required"))?;

    let path = state
        .uploads
        .save(SUBDIR, &content_type, file_name.as_deref(), bytes)
        .await?;

    let mut fields = Document::new();
    fields.insert("title".into(), Value::String(title.clone()));
    fields.insert(
        "description".into(),
        Value::String(form.description.unwrap_or_default()),
    );
    fields.insert("image".into(), Value::String(format!("/{path}")));
    fields.insert("alt".into(), Value::String(title));
    fields.insert("category".into(), Value::String(category));
    fields.insert("order".into(), Value::from(form.order.unwrap_or(0)));
    fields.insert(
        "is_featured".into(),
        Value::Bool(form.is_featured.unwrap_or(false)),
    );
    fields.insert(
        "is_active".into(),
        Value::Bool(form.is_active.unwrap_or(true)),
    );

    let created = state
        .repo(ResourceKind::GalleryImage)
        .create(fields)
        .await?;
    Ok(Json(created))
}

pub async fn update_gallery_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<Document>> {
    let form = read_form(multipart).await?;
    let repo = state.repo(ResourceKind::GalleryImage);

    let existing = repo
        .get(&image_id)
        .await?
        .ok_or_else(|| AppError::not_found("Image not found"))?;

    let mut update = Document::new();

    if let Some((content_type, file_name, bytes)) = form.file {
        let path = state
            .uploads
            .save(SUBDIR, &content_type, file_name.as_deref(), bytes)
            .await?;
        update.insert("image".into(), Value::String(format!("/{path}")));
        let alt = form
            .title
            .clone()
            .or_else(|| {
                existing.get("alt").and_then(Value::as_str).map(String::from)
            })
            .or_else(|| {
                existing
                    .get("title")
                    .and_then(Value::as_str)
                    .map(String::from)
            })
            .unwrap_or_default();
        update.insert("alt".into(), Value::String(alt));
    } else if let Some(image_url) = form.image_url.filter(|v| !v.is_empty()) {
        update.insert("image".into(), Value::String(image_url));
    }

    if let Some(title) = form.title {
        update.insert("title".into(), Value::String(title));
    }
    if let Some(description) = form.description {
        update.insert("description".into(), Value::String(description));
    }
    if let Some(category) = form.category {
        update.insert("category".into(), Value::String(category));
    }
    if let Some(order) = form.order {
        update.insert("order".into(), Value::from(order));
    }
    if let Some(flag) = form.is_featured {
        update.insert("is_featured".into(), Value::Bool(flag));
    }
    if let Some(flag) = form.is_active {
        update.insert("is_active".into(), Value::Bool(flag));
    }

    // Gallery updates re-fetch and return the record even when nothing
    // was modified, so a present record never maps to a no-op signal.
    repo.update(&image_id, update)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Image not found"))
}

pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state
        .repo(ResourceKind::GalleryImage)
        .delete(&image_id)
        .await?
    {
        Ok(Json(SuccessResponse::new("Image deleted successfully")))
    } else {
        Err(AppError::not_found("Image not found"))
    }
}

//! Team member handlers.
//!
//! Create and update travel as multipart form data because they can carry
//! a profile photo. The update transport is where empty-string and absent
//! diverge: an `image_url` field that is present but empty means "remove
//! the photo" (delete the stored file, persist an empty string), while an
//! absent field leaves the photo alone.

use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    Json,
};
use serde_json::Value;

use atrium_core::{Document, Query, ResourceKind};
use atrium_model::SuccessResponse;

use crate::errors::{AppError, AppResult};
use crate::AppState;

const SUBDIR: &str = "team";

/// Multipart fields shared by create and update.
#[derive(Debug, Default)]
struct TeamForm {
    file: Option<(String, Option<String>, Bytes)>,
    name: Option<String>,
    role: Option<String>,
    bio: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    department: Option<String>,
    image_url: Option<String>,
    order: Option<i64>,
    is_leadership: Option<bool>,
    is_active: Option<bool>,
}

async fn read_form(mut multipart: Multipart) -> AppResult<TeamForm> {
    let mut form = TeamForm::default();
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
            "name" => form.name = Some(text),
            "role" => form.role = Some(text),
            "bio" => form.bio = Some(text),
            "email" => form.email = Some(text),
            "phone" => form.phone = Some(text),
            "department" => form.department = Some(text),
            "image_url" => form.image_url = Some(text),
            "order" => form.order = Some(parse_int("order", &text)?),
            "is_leadership" => {
                form.is_leadership = Some(parse_bool("is_leadership", &text)?)
            }
            "is_active" => {
                form.is_active = Some(parse_bool("is_active", &text)?)
            }
            _ => {}
        }
    }
    Ok(form)
}

fn parse_int(field: &str, raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("{field} must be an integer")))
}

fn parse_bool(field: &str, raw: &str) -> AppResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::bad_request(format!("{field} must be a boolean"))),
    }
}

pub async fn list_team(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Document>>> {
    let members = state
        .repo(ResourceKind::TeamMember)
        .list_all(Query::new())
        .await?;
    Ok(Json(members))
}

pub async fn get_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<Document>> {
    state
        .repo(ResourceKind::TeamMember)
        .get(&member_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Team member not found"))
}

pub async fn create_team_member(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<Document>> {
    let form = read_form(multipart).await?;

    let name = form
        .name
        .ok_or_else(|| AppError::bad_request("name is required"))?;
    let role = form
        .role
        .ok_or_else(|| AppError::bad_request("role is required"))?;
    let bio = form
        .bio
        .ok_or_else(|| AppError::bad_request("bio is required"))?;

    let image = match form.file {
        Some((content_type, file_name, bytes)) => {
            let path = state
                .uploads
                .save(SUBDIR, &content_type, file_name.as_deref(), bytes)
                .await?;
            Some(format!("/{path}"))
        }
        None => form
            .image_url
            .filter(|url| !url.is_empty())
            .map(|url| format!("/{url}")),
    };

    let mut fields = Document::new();
    fields.insert("name".into(), Value::String(name));
    fields.insert("role".into(), Value::String(role));
    fields.insert("bio".into(), Value::String(bio));
    fields.insert(
        "email".into(),
        Value::String(form.email.unwrap_or_default()),
    );
    fields.insert(
        "phone".into(),
        Value::String(form.phone.unwrap_or_default()),
    );
    fields.insert(
        "department".into(),
        Value::String(form.department.unwrap_or_default()),
    );
    fields.insert(
        "image".into(),
        image.map(Value::String).unwrap_or(Value::Null),
    );
    fields.insert("order".into(), Value::from(form.order.unwrap_or(0)));
    fields.insert(
        "is_leadership".into(),
        Value::Bool(form.is_leadership.unwrap_or(false)),
    );
    fields.insert(
        "is_active".into(),
        Value::Bool(form.is_active.unwrap_or(true)),
    );

    let created = state.repo(ResourceKind::TeamMember).create(fields).await?;
    Ok(Json(created))
}

pub async fn update_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<Document>> {
    let form = read_form(multipart).await?;
    let repo = state.repo(ResourceKind::TeamMember);

    let existing = repo
        .get(&member_id)
        .await?
        .ok_or_else(|| AppError::not_found("Team member not found"))?;

    let mut update = Document::new();

    if let Some((content_type, file_name, bytes)) = form.file {
        let path = state
            .uploads
            .save(SUBDIR, &content_type, file_name.as_deref(), bytes)
            .await?;
        update.insert("image".into(), Value::String(format!("/{path}")));
    } else if let Some(image_url) = form.image_url {
        if image_url.trim().is_empty() {
            // Explicit clear: remove the stored file, persist "".
            if let Some(old) = existing.get("image").and_then(Value::as_str) {
                if !old.is_empty() {
                    state.uploads.remove_stored(old).await;
                }
            }
            update.insert("image".into(), Value::String(String::new()));
        } else {
            update.insert("image".into(), Value::String(format!("/{image_url}")));
        }
    }

    if let Some(name) = form.name {
        update.insert("name".into(), Value::String(name));
    }
    if let Some(role) = form.role {
        update.insert("role".into(), Value::String(role));
    }
    if let Some(bio) = form.bio {
        update.insert("bio".into(), Value::String(bio));
    }
    // Empty strings for the optional text fields are treated as "not
    // provided" on this transport.
    if let Some(email) = form.email.filter(|v| !v.trim().is_empty()) {
        update.insert("email".into(), Value::String(email));
    }
    if let Some(phone) = form.phone.filter(|v| !v.trim().is_empty()) {
        update.insert("phone".into(), Value::String(phone));
    }
    if let Some(dept) = form.department.filter(|v| !v.trim().is_empty()) {
        update.insert("department".into(), Value::String(dept));
    }
    if let Some(order) = form.order {
        update.insert("order".into(), Value::from(order));
    }
    if let Some(flag) = form.is_leadership {
        update.insert("is_leadership".into(), Value::Bool(flag));
    }
    if let Some(flag) = form.is_active {
        update.insert("is_active".into(), Value::Bool(flag));
    }

    repo.update(&member_id, update)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Team member not found"))
}

pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if state
        .repo(ResourceKind::TeamMember)
        .delete(&member_id)
        .await?
    {
        Ok(Json(SuccessResponse::new(
            "Team member deleted successfully",
        )))
    } else {
        Err(AppError::not_found("Team member not found"))
    }
}

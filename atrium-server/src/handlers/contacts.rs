use axum::{
    extract::{Path, Query as QueryParams, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use atrium_core::{normalize, Document, Query, ResourceKind};
use atrium_model::{ContactCreate, SuccessResponse};

use crate::errors::{AppError, AppResult};
use crate::handlers::to_document;
use crate::AppState;

/// Public contact form.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactCreate>,
) -> AppResult<Json<SuccessResponse>> {
    payload.validate()?;
    create_submission(&state, to_document(&payload)?).await?;
    Ok(Json(SuccessResponse::new(
        "Thank you for your message! We will get back to you within 24 hours.",
    )))
}

/// Typed form intake (proposal, LOR request, application, partnership).
/// The path segment overrides the payload's form type verbatim.
pub async fn submit_typed_form(
    State(state): State<AppState>,
    Path(form_type): Path<String>,
    Json(payload): Json<ContactCreate>,
) -> AppResult<Json<SuccessResponse>> {
    payload.validate()?;
    let mut fields = to_document(&payload)?;
    fields.insert("formType".into(), Value::String(form_type.clone()));
    create_submission(&state, fields).await?;

    let message = match form_type.as_str() {
        "Proposal" => {
            "Your proposal has been submitted successfully. Our team will \
             review and contact you soon."
        }
        "LOR Request" => {
            "Your LOR request has been received. We will process it within \
             5 business days."
        }
        "Application" => {
            "Your application has been submitted. Check your email for \
             further instructions."
        }
        "Partnership" => {
            "Thank you for your interest in partnering with us. We will \
             respond within 2 weeks."
        }
        _ => "Your submission has been received successfully.",
    };
    Ok(Json(SuccessResponse::new(message)))
}

async fn create_submission(
    state: &AppState,
    mut fields: Document,
) -> AppResult<Document> {
    // Every submission starts its triage life as "New".
    fields.insert("status".into(), Value::String("New".into()));
    Ok(state.repo(ResourceKind::Contact).create(fields).await?)
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    form_type: Option<String>,
}

/// Admin triage listing. Statuses are normalized on the way out; the
/// stored documents are left untouched.
pub async fn admin_list_contacts(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Vec<Document>>> {
    let mut filter = Query::new();
    if let Some(form_type) = &params.form_type {
        filter = filter.eq("formType", form_type.as_str());
    }
    let mut contacts = state.repo(ResourceKind::Contact).list_all(filter).await?;
    contacts.iter_mut().for_each(normalize::normalize_contact);
    Ok(Json(contacts))
}

pub async fn mark_contact_read(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> AppResult<Json<Value>> {
    let mut set = Document::new();
    set.insert("status".into(), Value::String("Read".into()));
    let updated = state
        .repo(ResourceKind::Contact)
        .update(&contact_id, set)
        .await?;
    if updated.is_none() {
        return Err(AppError::not_found("Contact not found"));
    }
    Ok(Json(json!({"message": "Contact marked as read"})))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> AppResult<Json<Value>> {
    if state
        .repo(ResourceKind::Contact)
        .delete(&contact_id)
        .await?
    {
        Ok(Json(json!({"message": "Contact deleted successfully"})))
    } else {
        Err(AppError::not_found("Contact not found"))
    }
}

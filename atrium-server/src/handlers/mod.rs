//! Request handlers, one module per resource type.

pub mod contacts;
pub mod events;
pub mod faqs;
pub mod gallery;
pub mod news;
pub mod partnerships;
pub mod programs;
pub mod search;
pub mod static_content;
pub mod stats;
pub mod team;

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use atrium_core::Document;

use crate::errors::AppError;

/// Serialize a validated payload into the opaque field mapping the
/// repository works on.
pub(crate) fn to_document<T: Serialize>(payload: &T) -> Result<Document, AppError> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::internal("payload did not serialize to an object")),
        Err(e) => Err(AppError::internal(format!("serialization failed: {e}"))),
    }
}

/// Wakeup ping for free-tier hosting keepalives.
pub async fn root() -> Json<Value> {
    tracing::info!("wakeup ping received");
    Json(json!({
        "status": "ok",
        "message": "Atrium API - Office of International Affairs",
        "version": "2.0",
        "timestamp": Utc::now(),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "Atrium API v2.0"}))
}

//! Admin credential storage and verification.
//!
//! Admin accounts live in their own collection with a SHA-256 hex digest
//! of the password, matching the credential records this system inherits.
//! There is exactly one privilege tier: authenticated admin.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::store::{Document, DocumentStore, Query};

const COLLECTION: &str = "admins";

pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Create an admin account. No uniqueness constraint is enforced here;
/// seeding checks for an existing username first.
pub async fn create_admin(
    store: &Arc<dyn DocumentStore>,
    username: &str,
    password: &str,
) -> StoreResult<Document> {
    let mut admin = Document::new();
    admin.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
    admin.insert("username".into(), Value::String(username.to_string()));
    admin.insert("password".into(), Value::String(password_digest(password)));
    admin.insert("role".into(), Value::String("admin".into()));
    admin.insert(
        "createdAt".into(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
    );
    let oid = store.insert(COLLECTION, admin.clone()).await?;
    admin.insert("_id".into(), Value::String(oid));
    Ok(admin)
}

pub async fn admin_exists(
    store: &Arc<dyn DocumentStore>,
    username: &str,
) -> StoreResult<bool> {
    Ok(store
        .find_one(COLLECTION, &Query::new().eq("username", username))
        .await?
        .is_some())
}

/// Check a username/password pair against the stored digest.
pub async fn authenticate(
    store: &Arc<dyn DocumentStore>,
    username: &str,
    password: &str,
) -> StoreResult<bool> {
    let query = Query::new()
        .eq("username", username)
        .eq("password", password_digest(password));
    Ok(store.find_one(COLLECTION, &query).await?.is_some())
}

//! Read-time view transforms.
//!
//! These are data-shaping steps applied to documents on the way out of
//! the store, never migrations: the stored value is left untouched unless
//! an explicit update changes it.

use serde_json::Value;

use atrium_model::ContactStatus;

use crate::store::Document;

/// Backfill the logical `id` from the internal `_id` for documents that
/// predate logical ids (applies to program and contact listings).
pub fn backfill_id(doc: &mut Document) {
    if !doc.contains_key("id") {
        if let Some(oid) = doc.get("_id").cloned() {
            doc.insert("id".into(), oid);
        }
    }
}

/// Collapse legacy status casings to the canonical capitalized form and
/// default a missing status to `"New"`.
pub fn normalize_contact(doc: &mut Document) {
    backfill_id(doc);
    let canonical = match doc.get("status").and_then(Value::as_str) {
        Some(raw) => ContactStatus::canonicalize(raw),
        None => Some("New"),
    };
    if let Some(canonical) = canonical {
        doc.insert("status".into(), Value::String(canonical.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn legacy_casings_collapse() {
        for (raw, canonical) in
            [("read", "Read"), ("new", "New"), ("replied", "Replied")]
        {
            let mut contact = doc(json!({"id": "c1", "status": raw}));
            normalize_contact(&mut contact);
            assert_eq!(contact.get("status"), Some(&json!(canonical)));
        }
    }

    #[test]
    fn missing_status_defaults_to_new() {
        let mut contact = doc(json!({"id": "c1"}));
        normalize_contact(&mut contact);
        assert_eq!(contact.get("status"), Some(&json!("New")));
    }

    #[test]
    fn unknown_status_passes_through() {
        let mut contact = doc(json!({"id": "c1", "status": "archived"}));
        normalize_contact(&mut contact);
        assert_eq!(contact.get("status"), Some(&json!("archived")));
    }

    #[test]
    fn id_backfills_from_internal_id() {
        let mut contact = doc(json!({"_id": "abc123", "status": "New"}));
        normalize_contact(&mut contact);
        assert_eq!(contact.get("id"), Some(&json!("abc123")));

        // An existing id is never overwritten.
        let mut contact = doc(json!({"_id": "abc123", "id": "logical"}));
        backfill_id(&mut contact);
        assert_eq!(contact.get("id"), Some(&json!("logical")));
    }
}

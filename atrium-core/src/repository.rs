//! The generic content repository.
//!
//! One implementation serves every resource type; the differences are
//! carried by [`ResourceSpec`] rows in the registry. All operations
//! address records by the logical id field, never by the store's internal
//! object id.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use atrium_model::Page;

use crate::error::StoreResult;
use crate::store::{Document, DocumentStore, Query, Sort, SortDirection};
use crate::update_policy::UpdatePolicy;

/// Which timestamps the repository stamps for a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampMode {
    /// `createdAt` once, `updatedAt` at creation and on every update.
    CreatedAndUpdated,
    /// `createdAt` only; the record has no update timestamp.
    CreatedOnly,
    /// `uploadDate` only (append-only media resources).
    UploadDate,
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    pub collection: &'static str,
    /// The caller-facing identifier field. `"id"` everywhere except
    /// static content, which is addressed by `"key"`.
    pub id_field: &'static str,
    pub timestamps: TimestampMode,
    pub default_sort: Option<(&'static str, SortDirection)>,
    pub update_policy: UpdatePolicy,
    /// Re-fetch and return the current record when an update modified
    /// nothing, instead of signaling a no-op.
    pub refetch_on_noop: bool,
    pub default_page_size: u32,
}

impl ResourceSpec {
    pub fn default_sort(&self) -> Option<Sort> {
        self.default_sort.map(|(field, direction)| Sort {
            field: field.to_string(),
            direction,
        })
    }

    fn id_query(&self, id: &str) -> Query {
        Query::new().eq(self.id_field, id)
    }
}

#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
    spec: &'static ResourceSpec,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("collection", &self.spec.collection)
            .finish_non_exhaustive()
    }
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>, spec: &'static ResourceSpec) -> Self {
        Self { store, spec }
    }

    pub fn spec(&self) -> &'static ResourceSpec {
        self.spec
    }

    /// Persist a new record. The logical id is assigned here, exactly
    /// once; callers never supply one. Returns the stored document with
    /// the internal `_id` included as an auxiliary field.
    pub async fn create(&self, mut fields: Document) -> StoreResult<Document> {
        let now = Value::String(now_rfc3339());
        fields.insert(
            "id".into(),
            Value::String(uuid::Uuid::new_v4().to_string()),
        );
        match self.spec.timestamps {
            TimestampMode::CreatedAndUpdated => {
                fields.insert("createdAt".into(), now.clone());
                fields.insert("updatedAt".into(), now);
            }
            TimestampMode::CreatedOnly => {
                fields.insert("createdAt".into(), now);
            }
            TimestampMode::UploadDate => {
                fields.insert("uploadDate".into(), now);
            }
        }
        let oid = self
            .store
            .insert(self.spec.collection, fields.clone())
            .await?;
        fields.insert("_id".into(), Value::String(oid));
        Ok(fields)
    }

    /// One page of the collection under `filter`. `total` is computed
    /// against the filter before the page window is applied; the count
    /// and the fetch are two separate store operations, not a snapshot.
    pub async fn paginate(
        &self,
        filter: Query,
        sort: Option<Sort>,
        page: u32,
        page_size: u32,
    ) -> StoreResult<Page<Document>> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let sort = sort.or_else(|| self.spec.default_sort());
        let total = self.store.count(self.spec.collection, &filter).await?;
        let skip = u64::from(page - 1) * u64::from(page_size);
        let items = self
            .store
            .find(
                self.spec.collection,
                &filter,
                sort.as_ref(),
                skip,
                Some(u64::from(page_size)),
            )
            .await?;
        Ok(Page::new(items, total, page, page_size))
    }

    /// Unpaginated listing with the resource's hard cap, for the
    /// hand-curated collections (team, FAQs, static content, contacts).
    pub async fn list_all(&self, filter: Query) -> StoreResult<Vec<Document>> {
        self.store
            .find(
                self.spec.collection,
                &filter,
                self.spec.default_sort().as_ref(),
                0,
                Some(u64::from(self.spec.default_page_size)),
            )
            .await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Document>> {
        self.store
            .find_one(self.spec.collection, &self.spec.id_query(id))
            .await
    }

    /// Apply a partial update under the resource's [`UpdatePolicy`].
    ///
    /// Returns the post-update record when the store reports a change,
    /// and `None` for "no update occurred", unless the resource opts
    /// into re-fetching regardless (gallery).
    pub async fn update(
        &self,
        id: &str,
        fields: Document,
    ) -> StoreResult<Option<Document>> {
        let mut set = self.spec.update_policy.apply(fields);
        if self.spec.timestamps == TimestampMode::CreatedAndUpdated {
            // Stamped after policy filtering: a policy-emptied payload
            // still refreshes updatedAt and therefore still counts as a
            // modification on an existing record.
            set.insert("updatedAt".into(), Value::String(now_rfc3339()));
        }
        if set.is_empty() {
            return if self.spec.refetch_on_noop {
                self.get(id).await
            } else {
                Ok(None)
            };
        }
        let outcome = self
            .store
            .update_one(self.spec.collection, &self.spec.id_query(id), set)
            .await?;
        if outcome.modified > 0 || self.spec.refetch_on_noop {
            self.get(id).await
        } else {
            Ok(None)
        }
    }

    /// Hard delete by logical id; returns whether a record existed.
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let deleted = self
            .store
            .delete_one(self.spec.collection, &self.spec.id_query(id))
            .await?;
        Ok(deleted > 0)
    }
}

/// Fixed microsecond precision so stored timestamps order correctly both
/// as parsed instants and as raw strings.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ResourceKind;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    fn repo(kind: ResourceKind) -> Repository {
        Repository::new(Arc::new(MemoryStore::new()), kind.spec())
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = repo(ResourceKind::Faq);
        let created = repo
            .create(doc(json!({
                "question": "How do I apply?",
                "answer": "Through the mobility portal.",
                "category": "Mobility",
                "order": 1
            })))
            .await
            .unwrap();
        let id = created.get("id").unwrap().as_str().unwrap();
        assert!(created.contains_key("createdAt"));
        assert!(created.contains_key("updatedAt"));
        assert!(created.contains_key("_id"));

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.get("question"), created.get("question"));
        assert_eq!(fetched.get("id"), created.get("id"));
    }

    #[tokio::test]
    async fn pagination_math_holds_across_windows() {
        let repo = repo(ResourceKind::News);
        for i in 0..23 {
            repo.create(doc(json!({
                "title": format!("Article {i}"),
                "content": "Body text long enough.",
                "category": "Announcement",
                "date": format!("2025-01-{:02}T00:00:00Z", i + 1)
            })))
            .await
            .unwrap();
        }
        for (page, expected_len) in [(1u32, 10), (2, 10), (3, 3), (4, 0)] {
            let result = repo
                .paginate(Query::new(), None, page, 10)
                .await
                .unwrap();
            assert_eq!(result.total, 23);
            assert_eq!(result.total_pages, 3);
            assert_eq!(result.items.len(), expected_len, "page {page}");
        }
        // Newest-first default sort.
        let first = repo.paginate(Query::new(), None, 1, 1).await.unwrap();
        assert_eq!(
            first.items[0].get("title"),
            Some(&json!("Article 22"))
        );
    }

    #[tokio::test]
    async fn update_absent_field_never_clears() {
        let repo = repo(ResourceKind::Program);
        let created = repo
            .create(doc(json!({
                "title": "Engineering Innovation",
                "description": "Program description here.",
                "partnerUniversity": "Stanford University, USA",
                "status": "Active"
            })))
            .await
            .unwrap();
        let id = created.get("id").unwrap().as_str().unwrap().to_string();
        let before = repo.get(&id).await.unwrap().unwrap();

        let updated = repo
            .update(&id, doc(json!({"title": null, "deadline": "March 2026"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.get("title"), before.get("title"));
        assert_eq!(updated.get("deadline"), Some(&json!("March 2026")));
        let before_ts = before.get("updatedAt").unwrap().as_str().unwrap();
        let after_ts = updated.get("updatedAt").unwrap().as_str().unwrap();
        assert!(after_ts >= before_ts);
    }

    #[tokio::test]
    async fn update_missing_id_signals_no_update() {
        let repo = repo(ResourceKind::Program);
        let result = repo
            .update("does-not-exist", doc(json!({"title": "x"})))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn gallery_noop_update_still_returns_record() {
        let repo = repo(ResourceKind::GalleryImage);
        let created = repo
            .create(doc(json!({
                "title": "Campus",
                "image": "/gallery/campus.jpg",
                "category": "Campus"
            })))
            .await
            .unwrap();
        let id = created.get("id").unwrap().as_str().unwrap().to_string();

        // Same value again: gallery has no update timestamp, so nothing
        // is modified, yet the record comes back.
        let result = repo
            .update(&id, doc(json!({"title": "Campus"})))
            .await
            .unwrap();
        assert!(result.is_some());

        // Even a fully-absent payload re-fetches.
        let result = repo.update(&id, Document::new()).await.unwrap();
        assert_eq!(
            result.unwrap().get("title"),
            Some(&json!("Campus"))
        );
    }

    #[tokio::test]
    async fn delete_is_idempotent_about_missing_ids() {
        let repo = repo(ResourceKind::Event);
        let created = repo
            .create(doc(json!({
                "title": "Education Fair",
                "type": "Conference",
                "description": "Annual education fair.",
                "startDate": "2025-03-15T10:00:00Z"
            })))
            .await
            .unwrap();
        let id = created.get("id").unwrap().as_str().unwrap().to_string();
        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(!repo.delete("never-existed").await.unwrap());
    }

    #[tokio::test]
    async fn static_content_is_addressed_by_key() {
        let repo = repo(ResourceKind::StaticContent);
        repo.create(doc(json!({
            "key": "vision_mission",
            "title": "Vision & Mission",
            "content": "Our vision is global collaboration.",
            "section": "about"
        })))
        .await
        .unwrap();
        let fetched = repo.get("vision_mission").await.unwrap().unwrap();
        assert_eq!(fetched.get("title"), Some(&json!("Vision & Mission")));
        let updated = repo
            .update("vision_mission", doc(json!({"section": "admissions"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.get("section"), Some(&json!("admissions")));
        assert!(repo.delete("vision_mission").await.unwrap());
    }
}

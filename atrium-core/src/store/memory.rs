//! HashMap-backed [`DocumentStore`] adapter.
//!
//! Backs the test suite and database-less development runs. Implements the
//! full store contract, including matched/modified accounting.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::store::query::{compare_values, Query, Sort, SortDirection};
use crate::store::{Document, DocumentStore, UpdateOutcome};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sort_docs(docs: &mut [Document], sort: &Sort) {
        docs.sort_by(|a, b| {
            let va = a.get(&sort.field).unwrap_or(&Value::Null);
            let vb = b.get(&sort.field).unwrap_or(&Value::Null);
            let ord = compare_values(va, vb);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    /// `$set`-merge; returns whether any field value actually changed.
    fn merge_set(target: &mut Document, set: &Document) -> bool {
        let mut changed = false;
        for (key, value) in set {
            if target.get(key) != Some(value) {
                target.insert(key.clone(), value.clone());
                changed = true;
            }
        }
        changed
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> StoreResult<String> {
        let oid = Uuid::new_v4().simple().to_string();
        document.insert("_id".into(), Value::String(oid.clone()));
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(oid)
    }

    async fn find_one(
        &self,
        collection: &str,
        query: &Query,
    ) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| query.matches(d)).cloned()))
    }

    async fn find(
        &self,
        collection: &str,
        query: &Query,
        sort: Option<&Sort>,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let mut matched: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter().filter(|d| query.matches(d)).cloned().collect()
            })
            .unwrap_or_default();
        if let Some(sort) = sort {
            Self::sort_docs(&mut matched, sort);
        }
        let iter = matched.into_iter().skip(skip as usize);
        Ok(match limit {
            Some(n) => iter.take(n as usize).collect(),
            None => iter.collect(),
        })
    }

    async fn count(&self, collection: &str, query: &Query) -> StoreResult<u64> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| query.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn update_one(
        &self,
        collection: &str,
        query: &Query,
        set: Document,
    ) -> StoreResult<UpdateOutcome> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(UpdateOutcome::default());
        };
        let Some(doc) = docs.iter_mut().find(|d| query.matches(d)) else {
            return Ok(UpdateOutcome::default());
        };
        let modified = Self::merge_set(doc, &set);
        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn upsert_one(
        &self,
        collection: &str,
        query: &Query,
        set: Document,
        set_on_insert: Document,
    ) -> StoreResult<()> {
        let outcome = self.update_one(collection, query, set.clone()).await?;
        if outcome.matched == 0 {
            let mut document = Document::new();
            for (field, value) in query.eq_fields() {
                document.insert(field.to_string(), value.clone());
            }
            for (field, value) in set_on_insert {
                document.insert(field, value);
            }
            for (field, value) in set {
                document.insert(field, value);
            }
            self.insert(collection, document).await?;
        }
        Ok(())
    }

    async fn delete_one(
        &self,
        collection: &str,
        query: &Query,
    ) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|d| query.matches(d)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn distinct(
        &self,
        collection: &str,
        field: &str,
        query: &Query,
    ) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read().await;
        let mut values: Vec<Value> = Vec::new();
        if let Some(docs) = collections.get(collection) {
            for doc in docs.iter().filter(|d| query.matches(d)) {
                if let Some(value) = doc.get(field) {
                    if !values.contains(value) {
                        values.push(value.clone());
                    }
                }
            }
        }
        values.sort_by(compare_values);
        Ok(values)
    }
}

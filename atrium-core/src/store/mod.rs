//! The document-store boundary.
//!
//! Collections are schemaless; a stored document is a JSON object keyed by
//! field name. Every document carries `_id`, the store's internal object
//! id, stringified on the way out and never authoritative: callers
//! address records by the logical id field their resource type declares.

mod memory;
mod postgres;
pub mod query;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use query::{Query, Sort, SortDirection};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;

/// A stored document: field name to JSON value.
pub type Document = serde_json::Map<String, Value>;

/// Result of an `update_one` call, mirroring matched/modified counts.
///
/// `matched` counts documents the query selected; `modified` counts those
/// whose content actually changed under the `$set`-merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// Persistence port implemented by the in-memory and Postgres adapters.
///
/// Keeping the repository generic over this trait is what lets the test
/// suite run the full contract against [`MemoryStore`] while production
/// deployments point at [`PgStore`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return the store's internal id for it.
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> StoreResult<String>;

    async fn find_one(
        &self,
        collection: &str,
        query: &Query,
    ) -> StoreResult<Option<Document>>;

    /// Filtered, sorted, windowed scan. `total` bookkeeping is the
    /// caller's job via [`DocumentStore::count`]; the two calls are not a
    /// snapshot-consistent pair.
    async fn find(
        &self,
        collection: &str,
        query: &Query,
        sort: Option<&Sort>,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>>;

    async fn count(&self, collection: &str, query: &Query) -> StoreResult<u64>;

    /// `$set`-merge `set` into the first document matching `query`.
    async fn update_one(
        &self,
        collection: &str,
        query: &Query,
        set: Document,
    ) -> StoreResult<UpdateOutcome>;

    /// `update_one` that inserts `query`'s equality fields plus
    /// `set_on_insert` plus `set` when nothing matched.
    async fn upsert_one(
        &self,
        collection: &str,
        query: &Query,
        set: Document,
        set_on_insert: Document,
    ) -> StoreResult<()>;

    /// Delete the first matching document; returns the deleted count.
    async fn delete_one(
        &self,
        collection: &str,
        query: &Query,
    ) -> StoreResult<u64>;

    /// Distinct values of `field` across documents matching `query`.
    async fn distinct(
        &self,
        collection: &str,
        field: &str,
        query: &Query,
    ) -> StoreResult<Vec<Value>>;
}

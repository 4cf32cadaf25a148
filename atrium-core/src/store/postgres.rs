//! Postgres/JSONB [`DocumentStore`] adapter.
//!
//! One row per document: `(collection, oid, doc)`. Queries are built at
//! runtime with [`QueryBuilder`] so the crate compiles without a live
//! database. Case-insensitive substring matching maps to `ILIKE`;
//! equality uses JSONB containment; ordering uses JSONB btree ordering
//! (numbers numerically, strings by collation).

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::query::{Op, Query, Sort, SortDirection};
use crate::store::{Document, DocumentStore, UpdateOutcome};

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS atrium_documents (
    collection TEXT NOT NULL,
    oid UUID PRIMARY KEY,
    doc JSONB NOT NULL
);
CREATE INDEX IF NOT EXISTS atrium_documents_collection_idx
    ON atrium_documents (collection);
";

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect and make sure the document table exists.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(8)
            .connect(url)
            .await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in SCHEMA.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, query: &Query) {
        for clause in query.clauses() {
            builder.push(" AND ");
            match &clause.op {
                Op::Eq(value) => {
                    let mut object = serde_json::Map::new();
                    object.insert(clause.field.clone(), value.clone());
                    builder.push("doc @> ");
                    builder.push_bind(Value::Object(object));
                }
                Op::Gte(value) => {
                    builder.push("doc->");
                    builder.push_bind(clause.field.clone());
                    builder.push("::text >= ");
                    builder.push_bind(value.clone());
                }
                Op::ContainsCi(needle) => {
                    builder.push("doc->>");
                    builder.push_bind(clause.field.clone());
                    builder.push("::text ILIKE ");
                    builder.push_bind(like_pattern(needle));
                }
            }
        }
        let any = query.any_contains();
        if !any.is_empty() {
            builder.push(" AND (");
            for (index, (field, needle)) in any.iter().enumerate() {
                if index > 0 {
                    builder.push(" OR ");
                }
                builder.push("doc->>");
                builder.push_bind(field.clone());
                builder.push("::text ILIKE ");
                builder.push_bind(like_pattern(needle));
            }
            builder.push(")");
        }
    }

    /// First matching (oid, doc) pair, or `None`.
    async fn find_one_row(
        &self,
        collection: &str,
        query: &Query,
    ) -> StoreResult<Option<(Uuid, Document)>> {
        let mut builder = QueryBuilder::new(
            "SELECT oid, doc FROM atrium_documents WHERE collection = ",
        );
        builder.push_bind(collection);
        Self::push_filter(&mut builder, query);
        builder.push(" LIMIT 1");
        let row = builder.build().fetch_optional(&self.pool).await?;
        row.map(|row| {
            let oid: Uuid = row.get("oid");
            let doc: Value = row.get("doc");
            Ok((oid, into_document(doc)?))
        })
        .transpose()
    }
}

fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn into_document(value: Value) -> StoreResult<Document> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Backend(format!(
            "stored document is not an object: {other}"
        ))),
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> StoreResult<String> {
        let oid = Uuid::new_v4();
        let id = oid.simple().to_string();
        document.insert("_id".into(), Value::String(id.clone()));
        sqlx::query(
            "INSERT INTO atrium_documents (collection, oid, doc) \
             VALUES ($1, $2, $3)",
        )
        .bind(collection)
        .bind(oid)
        .bind(Value::Object(document))
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_one(
        &self,
        collection: &str,
        query: &Query,
    ) -> StoreResult<Option<Document>> {
        Ok(self
            .find_one_row(collection, query)
            .await?
            .map(|(_, doc)| doc))
    }

    async fn find(
        &self,
        collection: &str,
        query: &Query,
        sort: Option<&Sort>,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        let mut builder = QueryBuilder::new(
            "SELECT doc FROM atrium_documents WHERE collection = ",
        );
        builder.push_bind(collection);
        Self::push_filter(&mut builder, query);
        if let Some(sort) = sort {
            builder.push(" ORDER BY doc->");
            builder.push_bind(sort.field.clone());
            builder.push("::text");
            match sort.direction {
                SortDirection::Ascending => builder.push(" ASC"),
                SortDirection::Descending => builder.push(" DESC"),
            };
        }
        builder.push(" OFFSET ");
        builder.push_bind(skip as i64);
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit as i64);
        }
        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|row| into_document(row.get::<Value, _>("doc")))
            .collect()
    }

    async fn count(&self, collection: &str, query: &Query) -> StoreResult<u64> {
        let mut builder = QueryBuilder::new(
            "SELECT COUNT(*) AS n FROM atrium_documents WHERE collection = ",
        );
        builder.push_bind(collection);
        Self::push_filter(&mut builder, query);
        let row = builder.build().fetch_one(&self.pool).await?;
        let n: i64 = row.get("n");
        Ok(n as u64)
    }

    async fn update_one(
        &self,
        collection: &str,
        query: &Query,
        set: Document,
    ) -> StoreResult<UpdateOutcome> {
        // Read-then-write; concurrent updates race with last-write-wins
        // per field set, which is the documented store contract.
        let Some((oid, current)) = self.find_one_row(collection, query).await?
        else {
            return Ok(UpdateOutcome::default());
        };
        let modified = set
            .iter()
            .any(|(key, value)| current.get(key) != Some(value));
        if modified {
            sqlx::query(
                "UPDATE atrium_documents SET doc = doc || $1 WHERE oid = $2",
            )
            .bind(Value::Object(set))
            .bind(oid)
            .execute(&self.pool)
            .await?;
        }
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
        let Some((oid, _)) = self.find_one_row(collection, query).await? else {
            return Ok(0);
        };
        let result = sqlx::query("DELETE FROM atrium_documents WHERE oid = $1")
            .bind(oid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn distinct(
        &self,
        collection: &str,
        field: &str,
        query: &Query,
    ) -> StoreResult<Vec<Value>> {
        let mut builder = QueryBuilder::new(
            "SELECT DISTINCT doc->",
        );
        builder.push_bind(field);
        builder.push("::text AS v FROM atrium_documents WHERE collection = ");
        builder.push_bind(collection);
        builder.push(" AND doc ? ");
        builder.push_bind(field);
        builder.push("::text");
        Self::push_filter(&mut builder, query);
        let rows = builder.build().fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|row| row.get::<Value, _>("v"))
            .collect())
    }
}

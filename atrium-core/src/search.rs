//! Cross-collection search.
//!
//! Fan-out over the four searchable resource types, one store query per
//! section, each capped at [`SECTION_CAP`] matches before merging. There
//! is no shared index and no cross-type relevance ranking: the result
//! list is ordered purely by section priority (programs, news, events,
//! partnerships).

use std::sync::Arc;

use serde_json::Value;

use atrium_model::{SearchResponse, SearchResult};

use crate::error::StoreResult;
use crate::store::{Document, DocumentStore, Query};

/// Per-section result cap, applied before merging.
pub const SECTION_CAP: u64 = 5;

/// Minimum query length accepted by the HTTP surface.
pub const MIN_QUERY_LEN: usize = 2;

const DESCRIPTION_LIMIT: usize = 200;

/// What to match and how to shape a hit, per searchable resource type.
#[derive(Debug, Clone, Copy)]
struct Section {
    /// Section name accepted in the `sections` input set.
    name: &'static str,
    /// `type` value carried by every hit from this section.
    kind: &'static str,
    collection: &'static str,
    /// Fixed text fields the substring match runs against.
    fields: &'static [&'static str],
    title_field: &'static str,
    description_field: &'static str,
    url_prefix: &'static str,
}

const SECTIONS: [Section; 4] = [
    Section {
        name: "programs",
        kind: "program",
        collection: "programs",
        fields: &["title", "description", "partnerUniversity"],
        title_field: "title",
        description_field: "description",
        url_prefix: "/student-mobility/programs",
    },
    Section {
        name: "news",
        kind: "news",
        collection: "news",
        fields: &["title", "content"],
        title_field: "title",
        description_field: "content",
        url_prefix: "/news-media",
    },
    Section {
        name: "events",
        kind: "event",
        collection: "events",
        fields: &["title", "description"],
        title_field: "title",
        description_field: "description",
        url_prefix: "/visits-delegations-events",
    },
    Section {
        name: "partnerships",
        kind: "partnership",
        collection: "partnerships",
        fields: &["partnerName", "details", "country"],
        title_field: "partnerName",
        description_field: "details",
        url_prefix: "/global-partnerships",
    },
];

/// Search `query` across the selected sections; an empty/absent selection
/// means all of them. Sub-queries run sequentially; order is fixed by
/// section priority, not completion order.
pub async fn global_search(
    store: &Arc<dyn DocumentStore>,
    query: &str,
    sections: Option<&[String]>,
) -> StoreResult<SearchResponse> {
    let mut results = Vec::new();
    for section in &SECTIONS {
        let selected = match sections {
            None => true,
            Some(list) if list.is_empty() => true,
            Some(list) => list.iter().any(|s| s == section.name),
        };
        if !selected {
            continue;
        }
        let matches = store
            .find(
                section.collection,
                &Query::new().any_contains_ci(section.fields, query),
                None,
                0,
                Some(SECTION_CAP),
            )
            .await?;
        results.extend(matches.iter().filter_map(|doc| to_result(section, doc)));
    }
    let total = results.len();
    Ok(SearchResponse { results, total })
}

fn to_result(section: &Section, doc: &Document) -> Option<SearchResult> {
    let id = doc
        .get("id")
        .or_else(|| doc.get("_id"))
        .and_then(Value::as_str)?
        .to_string();
    let title = doc
        .get(section.title_field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let description: String = doc
        .get(section.description_field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .chars()
        .take(DESCRIPTION_LIMIT)
        .collect();
    Some(SearchResult {
        kind: section.kind.to_string(),
        url: format!("{}/{}", section.url_prefix, id),
        id,
        title,
        description,
    })
}

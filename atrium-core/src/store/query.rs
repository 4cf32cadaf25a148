//! Filter and sort value types accepted at the store boundary.
//!
//! The shape deliberately covers only what the repository layer needs:
//! equality and `>=` clauses AND-combined, plus at most one OR-group of
//! case-insensitive substring predicates (the search fan-out shape).

use std::cmp::Ordering;

use chrono::DateTime;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Eq(Value),
    Gte(Value),
    ContainsCi(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub op: Op,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
    /// OR-group: a document matches when any listed field contains the
    /// needle case-insensitively. Empty means "no OR constraint".
    any_contains: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push(Clause {
            field: field.into(),
            op: Op::Eq(value.into()),
        });
        self
    }

    pub fn gte(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push(Clause {
            field: field.into(),
            op: Op::Gte(value.into()),
        });
        self
    }

    pub fn contains_ci(
        mut self,
        field: impl Into<String>,
        needle: impl Into<String>,
    ) -> Self {
        self.clauses.push(Clause {
            field: field.into(),
            op: Op::ContainsCi(needle.into()),
        });
        self
    }

    /// Add the OR-group matching `needle` in any of `fields`.
    pub fn any_contains_ci(mut self, fields: &[&str], needle: &str) -> Self {
        self.any_contains = fields
            .iter()
            .map(|f| ((*f).to_string(), needle.to_string()))
            .collect();
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn any_contains(&self) -> &[(String, String)] {
        &self.any_contains
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.any_contains.is_empty()
    }

    /// Equality clauses as (field, value) pairs; upserts seed inserted
    /// documents from these.
    pub fn eq_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.clauses.iter().filter_map(|c| match &c.op {
            Op::Eq(v) => Some((c.field.as_str(), v)),
            _ => None,
        })
    }

    pub fn matches(&self, doc: &serde_json::Map<String, Value>) -> bool {
        let all = self.clauses.iter().all(|clause| {
            let value = doc.get(&clause.field);
            match &clause.op {
                Op::Eq(expected) => value == Some(expected),
                Op::Gte(threshold) => value
                    .map(|v| compare_values(v, threshold) != Ordering::Less)
                    .unwrap_or(false),
                Op::ContainsCi(needle) => value
                    .and_then(Value::as_str)
                    .map(|s| contains_ci(s, needle))
                    .unwrap_or(false),
            }
        });
        if !all {
            return false;
        }
        if self.any_contains.is_empty() {
            return true;
        }
        self.any_contains.iter().any(|(field, needle)| {
            doc.get(field)
                .and_then(Value::as_str)
                .map(|s| contains_ci(s, needle))
                .unwrap_or(false)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Total order over stored values, used for sorting and `>=` filters.
///
/// RFC 3339 strings compare as instants so that timestamps with different
/// sub-second precision still order correctly; numbers compare
/// numerically; everything else falls back to a stable type rank.
pub(crate) fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => {
            match (
                DateTime::parse_from_rfc3339(x),
                DateTime::parse_from_rfc3339(y),
            ) {
                (Ok(dx), Ok(dy)) => dx.cmp(&dy),
                _ => x.cmp(y),
            }
        }
        (Value::Number(x), Value::Number(y)) => {
            let fx = x.as_f64().unwrap_or(f64::NAN);
            let fy = y.as_f64().unwrap_or(f64::NAN);
            fx.partial_cmp(&fy).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn eq_and_gte_combine_as_and() {
        let q = Query::new()
            .eq("status", "Active")
            .gte("order", 2);
        assert!(q.matches(&doc(json!({"status": "Active", "order": 5}))));
        assert!(!q.matches(&doc(json!({"status": "Active", "order": 1}))));
        assert!(!q.matches(&doc(json!({"status": "Expired", "order": 5}))));
    }

    #[test]
    fn any_contains_is_an_or_group() {
        let q = Query::new().any_contains_ci(&["title", "description"], "zurich");
        assert!(q.matches(&doc(json!({
            "title": "Computer Science & AI - ETH Zurich",
            "description": "World-class program."
        }))));
        assert!(q.matches(&doc(json!({
            "title": "Unrelated",
            "description": "Based in ZURICH."
        }))));
        assert!(!q.matches(&doc(json!({
            "title": "Unrelated",
            "description": "Elsewhere"
        }))));
    }

    #[test]
    fn missing_field_never_matches_gte() {
        let q = Query::new().gte("startDate", "2025-01-01T00:00:00Z");
        assert!(!q.matches(&doc(json!({"title": "no date"}))));
    }

    #[test]
    fn rfc3339_strings_compare_as_instants() {
        // Differing sub-second precision would misorder lexicographically.
        let a = json!("2025-01-01T00:00:00Z");
        let b = json!("2025-01-01T00:00:00.250Z");
        assert_eq!(compare_values(&a, &b), Ordering::Less);
    }
}

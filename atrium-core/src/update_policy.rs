//! Partial-update field filtering.
//!
//! Update payloads are mappings from field name to new value. Which of
//! those fields actually reach the store is a per-resource decision made
//! here, not inferred from code paths. The two variants are deliberately
//! NOT unified: existing clients rely on the difference.

use serde_json::Value;

use crate::store::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Drop fields whose value is the absent-value sentinel (`null`).
    /// A caller cannot clear a field through this policy alone.
    IgnoreAbsent,
    /// Drop `null` fields and fields that are present but equal to an
    /// empty (or whitespace-only) string. Non-string falsy values such as
    /// `false` and `0` still apply. Used by the free-text-heavy resources
    /// (news, events).
    IgnoreAbsentAndEmptyStrings,
}

impl UpdatePolicy {
    /// Filter `fields` down to the ones this policy applies.
    pub fn apply(&self, fields: Document) -> Document {
        fields
            .into_iter()
            .filter(|(_, value)| self.keeps(value))
            .collect()
    }

    fn keeps(&self, value: &Value) -> bool {
        match self {
            UpdatePolicy::IgnoreAbsent => !value.is_null(),
            UpdatePolicy::IgnoreAbsentAndEmptyStrings => match value {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                _ => true,
            },
        }
    }
}

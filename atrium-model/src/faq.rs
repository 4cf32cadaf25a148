//! FAQ records.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::require_len;

/// FAQ grouping. Stored and serialized in canonical capitalized form, but
/// legacy clients send lowercase variants, so deserialization is
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaqCategory {
    Admissions,
    Mobility,
    Visas,
    General,
    Partnerships,
}

impl FaqCategory {
    pub fn parse_ci(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "admissions" => Some(Self::Admissions),
            "mobility" => Some(Self::Mobility),
            "visas" => Some(Self::Visas),
            "general" => Some(Self::General),
            "partnerships" => Some(Self::Partnerships),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admissions => "Admissions",
            Self::Mobility => "Mobility",
            Self::Visas => "Visas",
            Self::General => "General",
            Self::Partnerships => "Partnerships",
        }
    }
}

impl<'de> Deserialize<'de> for FaqCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse_ci(&raw).ok_or_else(|| {
            de::Error::unknown_variant(
                &raw,
                &[
                    "Admissions",
                    "Mobility",
                    "Visas",
                    "General",
                    "Partnerships",
                ],
            )
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    /// Display order within the FAQ page.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqCreate {
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub featured: bool,
}

impl FaqCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("question", &self.question, 5, 500)?;
        require_len("answer", &self.answer, 10, 2000)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FaqCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl FaqUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(q) = self.question.as_deref() {
            require_len("question", q, 5, 500)?;
        }
        if let Some(a) = self.answer.as_deref() {
            require_len("answer", a, 10, 2000)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_deserializes_case_insensitively() {
        let cat: FaqCategory = serde_json::from_str("\"visas\"").unwrap();
        assert_eq!(cat, FaqCategory::Visas);
        let cat: FaqCategory = serde_json::from_str("\"ADMISSIONS\"").unwrap();
        assert_eq!(cat, FaqCategory::Admissions);
        assert!(serde_json::from_str::<FaqCategory>("\"housing\"").is_err());
    }

    #[test]
    fn category_serializes_canonical() {
        let json = serde_json::to_string(&FaqCategory::Visas).unwrap();
        assert_eq!(json, "\"Visas\"");
    }
}

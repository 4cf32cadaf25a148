//! Admin-editable static page content, addressed by a stable key
//! (`vision_mission`, `policies`, ...) rather than by generated id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{optional_len, require_len};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticContent {
    pub id: String,
    pub key: String,
    pub title: String,
    /// Markdown or HTML body.
    pub content: String,
    /// Site section the block belongs to, e.g. "about" or "admissions".
    pub section: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticContentCreate {
    pub key: String,
    pub title: String,
    pub content: String,
    pub section: String,
}

impl StaticContentCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("key", &self.key, 1, 100)?;
        require_len("title", &self.title, 1, 300)?;
        require_len("content", &self.content, 10, usize::MAX)?;
        require_len("section", &self.section, 1, 100)?;
        Ok(())
    }
}

/// The key is the address of a block and cannot be changed by an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticContentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl StaticContentUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        optional_len("title", self.title.as_deref(), 1, 300)?;
        optional_len("content", self.content.as_deref(), 10, usize::MAX)?;
        optional_len("section", self.section.as_deref(), 1, 100)?;
        Ok(())
    }
}

//! Gallery image records.
//!
//! Gallery entries are append-only media: they carry an `uploadDate`
//! instead of the created/updated timestamp pair used everywhere else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{optional_len, require_len};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// URL or `/`-prefixed upload path of the image.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub category: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImageCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub category: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GalleryImageCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("title", &self.title, 1, 200)?;
        require_len("description", &self.description, 0, 1000)?;
        require_len("image", &self.image, 1, usize::MAX)?;
        require_len("category", &self.category, 1, usize::MAX)?;
        optional_len("alt", self.alt.as_deref(), 0, 200)?;
        if self.order < 0 {
            return Err(ValidationError::new("order", "must be non-negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryImageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl GalleryImageUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        optional_len("title", self.title.as_deref(), 1, 200)?;
        optional_len("description", self.description.as_deref(), 0, 1000)?;
        if matches!(self.order, Some(o) if o < 0) {
            return Err(ValidationError::new("order", "must be non-negative"));
        }
        Ok(())
    }
}

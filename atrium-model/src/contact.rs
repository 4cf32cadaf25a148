//! Contact/enquiry form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{optional_len, require_email, require_len};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    New,
    Read,
    Replied,
}

impl ContactStatus {
    /// Canonical capitalized form of a possibly legacy-cased stored value.
    /// Unknown values are passed through untouched by the normalizer, so
    /// this only answers for the known set.
    pub fn canonicalize(raw: &str) -> Option<&'static str> {
        match raw {
            "new" | "New" => Some("New"),
            "read" | "Read" => Some("Read"),
            "replied" | "Replied" => Some("Replied"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormType {
    Enquiry,
    Proposal,
    #[serde(rename = "LOR Request")]
    LorRequest,
    Application,
    Partnership,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreate {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(rename = "formType", default = "default_form_type")]
    pub form_type: FormType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

fn default_form_type() -> FormType {
    FormType::Enquiry
}

impl ContactCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("firstName", &self.first_name, 1, 100)?;
        require_len("lastName", &self.last_name, 1, 100)?;
        require_email("email", &self.email)?;
        require_len("subject", &self.subject, 1, 200)?;
        require_len("message", &self.message, 10, 2000)?;
        optional_len("phone", self.phone.as_deref(), 0, 20)?;
        optional_len("country", self.country.as_deref(), 0, 100)?;
        optional_len("institution", self.institution.as_deref(), 0, 200)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(rename = "formType")]
    pub form_type: FormType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    pub status: ContactStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_covers_legacy_casings() {
        assert_eq!(ContactStatus::canonicalize("read"), Some("Read"));
        assert_eq!(ContactStatus::canonicalize("Replied"), Some("Replied"));
        assert_eq!(ContactStatus::canonicalize("archived"), None);
    }

    #[test]
    fn lor_request_wire_name() {
        let json = serde_json::to_string(&FormType::LorRequest).unwrap();
        assert_eq!(json, "\"LOR Request\"");
    }
}

//! Institutional partnership records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{optional_len, optional_url, require_len};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnershipType {
    Strategic,
    Research,
    #[serde(rename = "Dual Degree")]
    DualDegree,
    #[serde(rename = "Student Exchange")]
    StudentExchange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnershipStatus {
    Active,
    #[serde(rename = "Under Negotiation")]
    UnderNegotiation,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partnership {
    pub id: String,
    #[serde(rename = "partnerName")]
    pub partner_name: String,
    #[serde(rename = "type")]
    pub kind: PartnershipType,
    pub country: String,
    pub details: String,
    pub status: PartnershipStatus,
    #[serde(rename = "signedDate", skip_serializing_if = "Option::is_none")]
    pub signed_date: Option<DateTime<Utc>>,
    #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    /// MoU document link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "contactPerson", skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(rename = "contactEmail", skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnershipCreate {
    #[serde(rename = "partnerName")]
    pub partner_name: String,
    #[serde(rename = "type")]
    pub kind: PartnershipType,
    pub country: String,
    pub details: String,
    #[serde(default = "default_status")]
    pub status: PartnershipStatus,
    #[serde(rename = "signedDate", skip_serializing_if = "Option::is_none")]
    pub signed_date: Option<DateTime<Utc>>,
    #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "contactPerson", skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(rename = "contactEmail", skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

fn default_status() -> PartnershipStatus {
    PartnershipStatus::Active
}

impl PartnershipCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("partnerName", &self.partner_name, 1, 300)?;
        require_len("country", &self.country, 1, 100)?;
        require_len("details", &self.details, 10, 2000)?;
        optional_url("website", self.website.as_deref())?;
        optional_len("contactPerson", self.contact_person.as_deref(), 0, 200)?;
        optional_len("contactEmail", self.contact_email.as_deref(), 0, 200)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnershipUpdate {
    #[serde(rename = "partnerName", skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PartnershipType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PartnershipStatus>,
    #[serde(rename = "signedDate", skip_serializing_if = "Option::is_none")]
    pub signed_date: Option<DateTime<Utc>>,
    #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "contactPerson", skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(rename = "contactEmail", skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

impl PartnershipUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        optional_len("partnerName", self.partner_name.as_deref(), 1, 300)?;
        optional_len("details", self.details.as_deref(), 10, 2000)?;
        optional_url("website", self.website.as_deref())?;
        Ok(())
    }
}

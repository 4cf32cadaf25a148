//! Exchange program records.
//!
//! Programs carry the largest field set of any resource: the public
//! listing card fields plus the detailed cost/university sections shown on
//! a program's detail page. All of the detail fields are optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{optional_len, optional_url, require_len, require_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramStatus {
    Active,
    Inactive,
}

impl ProgramStatus {
    pub const ACTIVE: &'static str = "Active";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "partnerUniversity")]
    pub partner_university: String,
    pub duration: String,
    pub eligibility: String,
    pub deadline: String,
    #[serde(rename = "applicationLink")]
    pub application_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: ProgramStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(
        rename = "eligibilityDetailed",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub eligibility_detailed: Vec<String>,
    #[serde(rename = "tuitionFee", skip_serializing_if = "Option::is_none")]
    pub tuition_fee: Option<String>,
    #[serde(rename = "livingExpenses", skip_serializing_if = "Option::is_none")]
    pub living_expenses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
    #[serde(rename = "visaFees", skip_serializing_if = "Option::is_none")]
    pub visa_fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scholarships: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accommodation: Vec<String>,
    #[serde(
        rename = "universityFounded",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_founded: Option<String>,
    #[serde(
        rename = "universityRanking",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_ranking: Option<String>,
    #[serde(
        rename = "universitySpecialties",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub university_specialties: Vec<String>,
    #[serde(rename = "campusInfo", skip_serializing_if = "Option::is_none")]
    pub campus_info: Option<String>,
    #[serde(rename = "studentBody", skip_serializing_if = "Option::is_none")]
    pub student_body: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramCreate {
    pub title: String,
    pub description: String,
    #[serde(rename = "partnerUniversity")]
    pub partner_university: String,
    pub duration: String,
    pub eligibility: String,
    pub deadline: String,
    #[serde(rename = "applicationLink")]
    pub application_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_status")]
    pub status: ProgramStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(rename = "eligibilityDetailed", default)]
    pub eligibility_detailed: Vec<String>,
    #[serde(rename = "tuitionFee", skip_serializing_if = "Option::is_none")]
    pub tuition_fee: Option<String>,
    #[serde(rename = "livingExpenses", skip_serializing_if = "Option::is_none")]
    pub living_expenses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
    #[serde(rename = "visaFees", skip_serializing_if = "Option::is_none")]
    pub visa_fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel: Option<String>,
    #[serde(default)]
    pub scholarships: Vec<String>,
    #[serde(default)]
    pub accommodation: Vec<String>,
    #[serde(
        rename = "universityFounded",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_founded: Option<String>,
    #[serde(
        rename = "universityRanking",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_ranking: Option<String>,
    #[serde(rename = "universitySpecialties", default)]
    pub university_specialties: Vec<String>,
    #[serde(rename = "campusInfo", skip_serializing_if = "Option::is_none")]
    pub campus_info: Option<String>,
    #[serde(rename = "studentBody", skip_serializing_if = "Option::is_none")]
    pub student_body: Option<String>,
}

fn default_status() -> ProgramStatus {
    ProgramStatus::Active
}

impl ProgramCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("title", &self.title, 1, 200)?;
        require_len("description", &self.description, 10, 2000)?;
        require_len("partnerUniversity", &self.partner_university, 1, 200)?;
        require_len("duration", &self.duration, 1, 100)?;
        require_len("eligibility", &self.eligibility, 1, 500)?;
        require_len("deadline", &self.deadline, 1, 100)?;
        require_url("applicationLink", &self.application_link)?;
        optional_len("purpose", self.purpose.as_deref(), 0, 1000)?;
        optional_len("vision", self.vision.as_deref(), 0, 500)?;
        Ok(())
    }
}

/// Partial update payload; absent fields are skipped during serialization
/// so they never reach the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "partnerUniversity",
        skip_serializing_if = "Option::is_none"
    )]
    pub partner_university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(rename = "applicationLink", skip_serializing_if = "Option::is_none")]
    pub application_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProgramStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(
        rename = "eligibilityDetailed",
        skip_serializing_if = "Option::is_none"
    )]
    pub eligibility_detailed: Option<Vec<String>>,
    #[serde(rename = "tuitionFee", skip_serializing_if = "Option::is_none")]
    pub tuition_fee: Option<String>,
    #[serde(rename = "livingExpenses", skip_serializing_if = "Option::is_none")]
    pub living_expenses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
    #[serde(rename = "visaFees", skip_serializing_if = "Option::is_none")]
    pub visa_fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarships: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Vec<String>>,
    #[serde(
        rename = "universityFounded",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_founded: Option<String>,
    #[serde(
        rename = "universityRanking",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_ranking: Option<String>,
    #[serde(
        rename = "universitySpecialties",
        skip_serializing_if = "Option::is_none"
    )]
    pub university_specialties: Option<Vec<String>>,
    #[serde(rename = "campusInfo", skip_serializing_if = "Option::is_none")]
    pub campus_info: Option<String>,
    #[serde(rename = "studentBody", skip_serializing_if = "Option::is_none")]
    pub student_body: Option<String>,
}

impl ProgramUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        optional_len("title", self.title.as_deref(), 1, 200)?;
        optional_len("description", self.description.as_deref(), 10, 2000)?;
        optional_len(
            "partnerUniversity",
            self.partner_university.as_deref(),
            1,
            200,
        )?;
        optional_url("applicationLink", self.application_link.as_deref())?;
        Ok(())
    }
}

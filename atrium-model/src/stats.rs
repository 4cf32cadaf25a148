//! Public statistics and the admin-editable counter configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "totalPrograms")]
    pub total_programs: u64,
    #[serde(rename = "partnerUniversities")]
    pub partner_universities: u64,
    #[serde(rename = "studentsExchanged")]
    pub students_exchanged: i64,
    pub countries: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedStats {
    #[serde(flatten)]
    pub basic: Stats,
    #[serde(rename = "totalEvents")]
    pub total_events: u64,
    #[serde(rename = "activePartnerships")]
    pub active_partnerships: u64,
    #[serde(rename = "internationalStudents")]
    pub international_students: u64,
    #[serde(rename = "newsArticles")]
    pub news_articles: u64,
    #[serde(rename = "teamMembers")]
    pub team_members: u64,
}

/// Admin-editable counters that are displayed but not derivable from any
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(rename = "studentsExchanged")]
    pub students_exchanged: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsConfigUpdate {
    #[serde(
        rename = "studentsExchanged",
        skip_serializing_if = "Option::is_none"
    )]
    pub students_exchanged: Option<i64>,
}

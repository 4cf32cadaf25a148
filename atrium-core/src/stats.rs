//! Website statistics and the admin-editable counter configuration.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use atrium_model::{ExtendedStats, Stats, StatsConfig};

use crate::error::StoreResult;
use crate::store::{Document, DocumentStore, Query};

const CONFIG_COLLECTION: &str = "stats_config";
const CONFIG_KEY: &str = "stats";
const DEFAULT_STUDENTS_EXCHANGED: i64 = 150;

/// Fixed counters that are displayed but not tracked anywhere.
const COUNTRIES: u64 = 12;
const INTERNATIONAL_STUDENTS: u64 = 250;

fn config_query() -> Query {
    Query::new().eq("key", CONFIG_KEY)
}

pub async fn get_stats_config(
    store: &Arc<dyn DocumentStore>,
) -> StoreResult<StatsConfig> {
    let doc = store.find_one(CONFIG_COLLECTION, &config_query()).await?;
    let students_exchanged = doc
        .as_ref()
        .and_then(|d| d.get("studentsExchanged"))
        .and_then(Value::as_i64)
        .unwrap_or(DEFAULT_STUDENTS_EXCHANGED);
    Ok(StatsConfig {
        students_exchanged,
    })
}

/// Upsert the configuration document, dropping absent fields from the
/// update the same way record updates do.
pub async fn update_stats_config(
    store: &Arc<dyn DocumentStore>,
    update: Document,
) -> StoreResult<StatsConfig> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let mut set: Document = update
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect();
    set.insert("updatedAt".into(), Value::String(now.clone()));
    let mut set_on_insert = Document::new();
    set_on_insert.insert("createdAt".into(), Value::String(now));
    store
        .upsert_one(CONFIG_COLLECTION, &config_query(), set, set_on_insert)
        .await?;
    get_stats_config(store).await
}

pub async fn get_stats(store: &Arc<dyn DocumentStore>) -> StoreResult<Stats> {
    let active = Query::new().eq("status", "Active");
    let total_programs = store.count("programs", &active).await?;
    let partner_universities = store
        .distinct("programs", "partnerUniversity", &active)
        .await?
        .len() as u64;
    let config = get_stats_config(store).await?;
    Ok(Stats {
        total_programs,
        partner_universities,
        students_exchanged: config.students_exchanged,
        countries: COUNTRIES,
    })
}

pub async fn get_extended_stats(
    store: &Arc<dyn DocumentStore>,
) -> StoreResult<ExtendedStats> {
    let basic = get_stats(store).await?;
    let total_events = store.count("events", &Query::new()).await?;
    let active_partnerships = store
        .count("partnerships", &Query::new().eq("status", "Active"))
        .await?;
    let news_articles = store.count("news", &Query::new()).await?;
    let team_members = store.count("team", &Query::new()).await?;
    Ok(ExtendedStats {
        basic,
        total_events,
        active_partnerships,
        international_students: INTERNATIONAL_STUDENTS,
        news_articles,
        team_members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ResourceKind;
    use crate::repository::Repository;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn stats_config_defaults_then_round_trips() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let config = get_stats_config(&store).await.unwrap();
        assert_eq!(config.students_exchanged, 150);

        let config = update_stats_config(
            &store,
            doc(json!({"studentsExchanged": 275})),
        )
        .await
        .unwrap();
        assert_eq!(config.students_exchanged, 275);
        assert_eq!(
            get_stats_config(&store).await.unwrap().students_exchanged,
            275
        );
    }

    #[tokio::test]
    async fn stats_count_active_programs_and_distinct_partners() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let programs =
            Repository::new(store.clone(), ResourceKind::Program.spec());
        for (title, uni, status) in [
            ("CS & AI", "ETH Zurich, Switzerland", "Active"),
            ("Robotics", "ETH Zurich, Switzerland", "Active"),
            ("Business", "LSE, UK", "Active"),
            ("Archived", "Old University", "Inactive"),
        ] {
            programs
                .create(doc(json!({
                    "title": title,
                    "description": "A program description here.",
                    "partnerUniversity": uni,
                    "status": status
                })))
                .await
                .unwrap();
        }
        let stats = get_stats(&store).await.unwrap();
        assert_eq!(stats.total_programs, 3);
        assert_eq!(stats.partner_universities, 2);
        assert_eq!(stats.countries, 12);
    }
}

use axum::{extract::State, Json};

use atrium_core::stats;
use atrium_model::{ExtendedStats, Stats, StatsConfig, StatsConfigUpdate};

use crate::errors::AppResult;
use crate::handlers::to_document;
use crate::AppState;

pub async fn get_stats(
    State(state): State<AppState>,
) -> AppResult<Json<Stats>> {
    Ok(Json(stats::get_stats(&state.store).await?))
}

pub async fn get_extended_stats(
    State(state): State<AppState>,
) -> AppResult<Json<ExtendedStats>> {
    Ok(Json(stats::get_extended_stats(&state.store).await?))
}

pub async fn get_stats_config(
    State(state): State<AppState>,
) -> AppResult<Json<StatsConfig>> {
    Ok(Json(stats::get_stats_config(&state.store).await?))
}

pub async fn update_stats_config(
    State(state): State<AppState>,
    Json(payload): Json<StatsConfigUpdate>,
) -> AppResult<Json<StatsConfig>> {
    let config =
        stats::update_stats_config(&state.store, to_document(&payload)?)
            .await?;
    Ok(Json(config))
}

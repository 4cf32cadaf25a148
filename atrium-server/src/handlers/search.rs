use axum::{
    extract::{Query as QueryParams, State},
    Json,
};
use serde::Deserialize;

use atrium_core::search::{global_search, MIN_QUERY_LEN};
use atrium_model::SearchResponse;

use crate::errors::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: String,
    /// Comma-separated section names; absent or empty means all.
    sections: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    if params.q.chars().count() < MIN_QUERY_LEN {
        return Err(AppError::bad_request(format!(
            "query must be at least {MIN_QUERY_LEN} characters"
        )));
    }
    let sections: Option<Vec<String>> = params.sections.map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    });
    let response =
        global_search(&state.store, &params.q, sections.as_deref()).await?;
    Ok(Json(response))
}

use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, LeaderboardParams, SearchParams};
use crate::api::errors::ApiResult;
use crate::search::{search, SearchContext, SearchOutcome};
use crate::stats::{top_reviewers, ReviewerStat};

pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchOutcome>> {
    let catalog = state.load()?;
    let ctx = SearchContext {
        categories: &state.categories,
        disambiguations: &state.disambiguations,
        search: &state.config.search,
        stats: &state.config.stats,
    };

    Ok(Json(search(&catalog.items, &params.q, &ctx)))
}

pub async fn get_top_reviewers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> ApiResult<Json<Vec<ReviewerStat>>> {
    let catalog = state.load()?;
    let settings = &state.config.stats;
    let limit = params.limit.unwrap_or(settings.top_reviewers_limit);

    Ok(Json(top_reviewers(&catalog.items, limit, settings)))
}

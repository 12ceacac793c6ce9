use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{acting_user, AppState};
use crate::api::errors::{ApiError, ApiResult};
use crate::api::models::{CommentRequest, RatingRequest};
use crate::domain::{CommentId, Item, ItemId, RatingId};

/// Creates the caller's rating or replaces their previous one
pub async fn submit_rating(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(item_id): Path<ItemId>,
    Json(request): Json<RatingRequest>,
) -> ApiResult<Json<Item>> {
    let item = state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        Ok(catalog
            .submit_rating(&actor, item_id, request.value, &request.review)?
            .clone())
    })?;

    Ok(Json(item))
}

pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((item_id, rating_id)): Path<(ItemId, RatingId)>,
) -> ApiResult<StatusCode> {
    state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        catalog
            .delete_rating(&actor, item_id, rating_id)
            .map_err(ApiError::from)
    })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((item_id, rating_id)): Path<(ItemId, RatingId)>,
    Json(request): Json<CommentRequest>,
) -> ApiResult<impl IntoResponse> {
    let max_chars = state.config.search.max_comment_chars;
    let comment = state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        Ok(catalog
            .add_comment(&actor, item_id, rating_id, &request.text, max_chars)?
            .clone())
    })?;

    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((item_id, rating_id, comment_id)): Path<(ItemId, RatingId, CommentId)>,
) -> ApiResult<StatusCode> {
    state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        catalog
            .delete_comment(&actor, item_id, rating_id, comment_id)
            .map_err(ApiError::from)
    })?;

    Ok(StatusCode::NO_CONTENT)
}

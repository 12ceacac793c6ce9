use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{acting_user, current_user, AppState};
use crate::api::errors::{ApiError, ApiResult};
use crate::api::models::ItemDetail;
use crate::domain::{Item, ItemId, NewItem};
use crate::errors::CatalogError;
use crate::search::{filter_items, ItemFilter};
use crate::stats::other_ratings;

pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ItemFilter>,
) -> ApiResult<Json<Vec<Item>>> {
    let catalog = state.load()?;
    let items = filter_items(&catalog.items, &filter, &state.categories)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(item_id): Path<ItemId>,
) -> ApiResult<Json<ItemDetail>> {
    let catalog = state.load()?;
    let item = catalog
        .item(item_id)
        .ok_or_else(|| CatalogError::not_found(format!("Item {}", item_id)))?;
    let viewer = current_user(&headers, &catalog).map(|u| u.id);

    Ok(Json(ItemDetail {
        category_display: state.categories.display_name(&item.category).to_string(),
        other_ratings: other_ratings(item, viewer),
        item: item.clone(),
    }))
}

pub async fn add_item(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(new_item): Json<NewItem>,
) -> ApiResult<impl IntoResponse> {
    let item = state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        Ok(catalog.add_item(&actor, new_item, &state.categories)?.clone())
    })?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(item_id): Path<ItemId>,
) -> ApiResult<StatusCode> {
    state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        catalog.delete_item(&actor, item_id).map_err(ApiError::from)
    })?;

    Ok(StatusCode::NO_CONTENT)
}

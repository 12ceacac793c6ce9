use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{acting_user, AppState};
use crate::api::errors::{ApiError, ApiResult};
use crate::api::models::{Credentials, RatingRequest, UserPosts, UserProfile};
use crate::domain::{Catalog, ProfileRating, PublicUser};
use crate::errors::CatalogError;
use crate::stats::{round_to_tenth, user_stats};

pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<impl IntoResponse> {
    let user = state.mutate(|catalog| {
        let user = catalog.register_user(&credentials.name, &credentials.password)?;
        Ok(PublicUser::from(user))
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<PublicUser>> {
    let catalog = state.load()?;
    let user = catalog.sign_in(&credentials.name, &credentials.password)?;
    Ok(Json(PublicUser::from(user)))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    let catalog = state.load()?;
    require_user(&catalog, &name)?;

    let received = catalog.profile_ratings_for(&name);
    let profile_rating = if received.is_empty() {
        None
    } else {
        let sum: f64 = received.iter().map(|p| f64::from(p.rating)).sum();
        Some(round_to_tenth(sum / received.len() as f64))
    };

    Ok(Json(UserProfile {
        stats: user_stats(&catalog.items, &name),
        profile_rating,
        name,
    }))
}

/// Everything the user has written: reviews first, then comments
pub async fn get_posts(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<UserPosts>> {
    let catalog = state.load()?;
    require_user(&catalog, &name)?;

    Ok(Json(UserPosts {
        reviews: catalog.reviews_by(&name),
        comments: catalog.comments_by(&name),
    }))
}

pub async fn list_profile_ratings(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<ProfileRating>>> {
    let catalog = state.load()?;
    require_user(&catalog, &name)?;

    let ratings = catalog.profile_ratings_for(&name).into_iter().cloned().collect();
    Ok(Json(ratings))
}

pub async fn submit_profile_rating(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(name): Path<String>,
    Json(request): Json<RatingRequest>,
) -> ApiResult<Json<ProfileRating>> {
    let profile_rating = state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        Ok(catalog
            .submit_profile_rating(&actor, &name, request.value, &request.review)?
            .clone())
    })?;

    Ok(Json(profile_rating))
}

fn require_user(catalog: &Catalog, name: &str) -> ApiResult<()> {
    match catalog.user(name) {
        Some(_) => Ok(()),
        None => Err(ApiError::from(CatalogError::not_found(format!("User `{}`", name)))),
    }
}

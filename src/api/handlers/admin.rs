use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use std::sync::Arc;

use super::{acting_user, AppState};
use crate::api::errors::{ApiError, ApiResult};
use crate::api::models::{ExportResponse, PurgeResponse};
use crate::domain::{Catalog, PurgeScope, User};
use crate::errors::CatalogError;
use crate::export::Exporter;
use crate::stats::{site_stats, SiteStats};

pub async fn get_site_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<SiteStats>> {
    let catalog = state.load()?;
    require_admin(&headers, &catalog)?;

    Ok(Json(site_stats(&catalog.users, &catalog.items)))
}

pub async fn export_data(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ExportResponse>> {
    let catalog = state.load()?;
    let admin = require_admin(&headers, &catalog)?;

    log::info!("Admin {} triggered export", admin.name);
    let exporter = Exporter::new(&state.config.storage.export_dir)?;
    let path = exporter.export(&catalog)?;

    Ok(Json(ExportResponse {
        file: path.display().to_string(),
    }))
}

pub async fn purge(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(scope): Path<PurgeScope>,
) -> ApiResult<Json<PurgeResponse>> {
    let removed = state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        catalog.purge(&actor, scope).map_err(ApiError::from)
    })?;

    Ok(Json(PurgeResponse { removed }))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    state.mutate(|catalog| {
        let actor = acting_user(&headers, catalog)?;
        catalog.delete_user(&actor, &name).map_err(ApiError::from)
    })?;

    Ok(StatusCode::NO_CONTENT)
}

fn require_admin(headers: &HeaderMap, catalog: &Catalog) -> ApiResult<User> {
    let user = acting_user(headers, catalog)?;
    if !user.is_admin {
        return Err(CatalogError::forbidden("Admin privileges required").into());
    }
    Ok(user)
}

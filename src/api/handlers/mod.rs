use axum::http::HeaderMap;
use serde::Deserialize;

use crate::api::errors::{ApiError, ApiResult};
use crate::config::settings::AppConfig;
use crate::config::{get_disambiguations, Categories, Disambiguation};
use crate::database::Store;
use crate::domain::{Catalog, User};

pub mod admin;
pub mod items;
pub mod reviews;
pub mod users;
pub mod views;

/// Header naming the signed-in user. It is trusted as sent; sign-in only
/// checks credentials and issues no token.
pub const USER_HEADER: &str = "x-user-name";

pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
    pub categories: Categories,
    pub disambiguations: Vec<Disambiguation>,
}

impl AppState {
    pub fn new(store: Store, config: AppConfig) -> Self {
        Self {
            store,
            config,
            categories: Categories::default(),
            disambiguations: get_disambiguations(),
        }
    }

    pub fn load(&self) -> ApiResult<Catalog> {
        Ok(self.store.load_catalog()?)
    }

    /// Loads a fresh snapshot, applies `change` and writes it back.
    /// Nothing is saved when `change` fails.
    pub fn mutate<T>(&self, change: impl FnOnce(&mut Catalog) -> ApiResult<T>) -> ApiResult<T> {
        let mut catalog = self.load()?;
        let result = change(&mut catalog)?;
        self.store.save_catalog(&catalog)?;
        Ok(result)
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}

/// The signed-in user, if the header names a known account
pub fn current_user<'a>(headers: &HeaderMap, catalog: &'a Catalog) -> Option<&'a User> {
    headers
        .get(USER_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|name| catalog.user(name.trim()))
}

pub fn acting_user(headers: &HeaderMap, catalog: &Catalog) -> ApiResult<User> {
    current_user(headers, catalog)
        .cloned()
        .ok_or(ApiError::Unauthenticated)
}

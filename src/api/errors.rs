use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::errors::CatalogError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Catalog(CatalogError),
    /// No `X-User-Name` header, or it names nobody
    Unauthenticated,
    Internal(anyhow::Error),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Catalog(CatalogError::Forbidden(_)) => StatusCode::FORBIDDEN,
            Self::Catalog(CatalogError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Catalog(CatalogError::DuplicateUser(_)) => StatusCode::CONFLICT,
            Self::Catalog(CatalogError::InvalidCredentials) | Self::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Catalog(err) => err.to_string(),
            Self::Unauthenticated => "Please sign in first".to_string(),
            Self::Internal(err) => {
                log::error!("Request failed: {:?}", err);
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

//! Mapping from catalog errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::common::PaginationError;
use crate::domains::resources::CatalogError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by every API handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::DuplicateResource) => StatusCode::CONFLICT,
            ApiError::Catalog(CatalogError::MissingResource(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::UnknownTopic(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Catalog(CatalogError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Catalog(CatalogError::Database(err)) => {
                tracing::error!(error = %err, "Catalog storage failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

use axum::{extract::Extension, Json};

use crate::domains::resources::CatalogError;
use crate::domains::topics::Topic;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/topics` - every topic, for the filter chips.
pub async fn list_topics(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = state.topics.list().await.map_err(CatalogError::from)?;
    Ok(Json(topics))
}
